//! Domain identifier types
//!
//! Newtype wrapper for entity identifiers. Ids are assigned when an entity
//! is materialized into the editable set, are unique within the process,
//! and are never reused: a reset regenerates every id.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Entity identifier newtype wrapper
///
/// Deliberately not derived from entity content, so two entities with
/// identical text at different positions remain distinguishable.
///
/// # Examples
///
/// ```
/// use anonymize::domain::ids::EntityId;
///
/// let a = EntityId::new();
/// let b = EntityId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a fresh, process-unique id
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
