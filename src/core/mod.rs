//! Core review-engine logic
//!
//! Everything in this module is synchronous and single-threaded: mutations
//! run one at a time in response to discrete user actions, and every
//! derived view is a pure function recomputed from current state on read.
//!
//! - [`store`] - editable entity set, edit operations, anonymized rendering
//! - [`segments`] - offset resolver producing plain/entity display segments
//! - [`groups`] - case-insensitive text grouping for bulk review
//! - [`annotate`] - manual annotation from a user text selection
//! - [`render`] - style-dependent replacement tokens and substitution
//! - [`offset`] - character/byte offset conversion

pub mod annotate;
pub mod groups;
pub mod offset;
pub mod render;
pub mod segments;
pub mod store;

pub use groups::EntityGroup;
pub use segments::TextSegment;
pub use store::{EntityStore, StoreChange};
