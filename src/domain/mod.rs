//! Domain models and types.
//!
//! This module contains the core domain models, types, and business rules
//! for the review engine.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Entity models** ([`DetectedEntity`], [`EditableEntity`], [`DetectionResult`])
//! - **Strongly-typed identifiers** ([`EntityId`])
//! - **Anonymization styles** ([`AnonymizationStyle`])
//! - **Error types** ([`AnonymizeError`], [`ServiceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Entity ids use the newtype pattern: an [`EntityId`] is process-unique,
//! assigned at materialization time, and never derived from entity content.
//! Two entities with identical surface text therefore stay distinguishable:
//!
//! ```
//! use anonymize::domain::{DetectedEntity, EditableEntity};
//!
//! let detected = DetectedEntity::new("PERSON", "Müller", 0, 6, 0.9);
//! let first = EditableEntity::from_detected(&detected);
//! let second = EditableEntity::from_detected(&detected);
//! assert_ne!(first.id, second.id);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, AnonymizeError>`](Result).
//! Entity-store edits are infallible by design (spurious ids are no-ops).

pub mod entity;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use entity::{AnonymizationStyle, DetectedEntity, DetectionResult, EditableEntity};
pub use errors::{AnonymizeError, ServiceError};
pub use ids::EntityId;
pub use result::Result;
