//! External integrations
//!
//! Adapters wrap everything outside the process boundary behind narrow
//! interfaces. Currently that is the local analysis service.

pub mod analyzer;
