//! Entity data models
//!
//! These types mirror the detection result shape produced by the local
//! analysis service and add the client-side edit state layered on top of it.
//!
//! All offsets are **character** offsets (Unicode scalar values) into the
//! immutable source text of one detection result, as half-open intervals
//! `[start, end)`. The service counts code points, not bytes; byte
//! conversion happens inside the core when slicing Rust strings.

use crate::domain::ids::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anonymization style applied to non-excluded entity spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnonymizationStyle {
    /// Replace the span with `<TYPE>`
    #[default]
    Replace,
    /// Replace the span with a fixed-length mask token
    Mask,
    /// Replace the span with a short placeholder derived from the type label
    Hash,
    /// Replace the span with a fixed redaction marker
    Redact,
}

impl AnonymizationStyle {
    /// All supported styles, in display order
    pub const ALL: [AnonymizationStyle; 4] =
        [Self::Replace, Self::Mask, Self::Hash, Self::Redact];

    /// Wire/display name of the style
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Mask => "mask",
            Self::Hash => "hash",
            Self::Redact => "redact",
        }
    }
}

impl fmt::Display for AnonymizationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnonymizationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "mask" => Ok(Self::Mask),
            "hash" => Ok(Self::Hash),
            "redact" => Ok(Self::Redact),
            other => Err(format!(
                "Invalid anonymization style '{other}'. Must be one of: replace, mask, hash, redact"
            )),
        }
    }
}

/// A PII entity as detected by the analysis service
///
/// The type taxonomy is a free-form string (e.g. `PERSON`, `LOCATION`,
/// `CH_AHV`) so Swiss-specific recognizers can add subtypes without a
/// client-side code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEntity {
    /// Category label (free-form taxonomy)
    pub entity_type: String,
    /// The substring covered by the span, cached at detection time
    pub text: String,
    /// Start offset in characters (inclusive)
    pub start: usize,
    /// End offset in characters (exclusive)
    pub end: usize,
    /// Confidence score in [0.0, 1.0]
    pub score: f32,
}

impl DetectedEntity {
    /// Create a new detected entity
    pub fn new(
        entity_type: impl Into<String>,
        text: impl Into<String>,
        start: usize,
        end: usize,
        score: f32,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            text: text.into(),
            start,
            end,
            score: score.clamp(0.0, 1.0),
        }
    }
}

/// A detected entity plus client-only edit state
///
/// Materialized from a [`DetectedEntity`] when a detection result arrives,
/// or created directly by the manual annotation engine. The `id` is
/// process-unique and never derived from content, so identical text at
/// different positions stays distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableEntity {
    /// Process-unique identifier, assigned at materialization time
    pub id: EntityId,
    /// Current (possibly reclassified) category label
    pub entity_type: String,
    /// The substring covered by the span
    pub text: String,
    /// Start offset in characters (inclusive)
    pub start: usize,
    /// End offset in characters (exclusive)
    pub end: usize,
    /// Confidence score; manually added entities use 1.0
    pub score: f32,
    /// When true, the rendered output keeps the original text
    pub excluded: bool,
    /// Category label at detection time, kept for provenance
    pub original_type: String,
}

impl EditableEntity {
    /// Materialize edit state for a detected entity with a fresh id
    pub fn from_detected(entity: &DetectedEntity) -> Self {
        Self {
            id: EntityId::new(),
            entity_type: entity.entity_type.clone(),
            text: entity.text.clone(),
            start: entity.start,
            end: entity.end,
            score: entity.score,
            excluded: false,
            original_type: entity.entity_type.clone(),
        }
    }

    /// Create a manually annotated entity
    ///
    /// Manual entities have no prior detection, so the original type equals
    /// the chosen type and the score is fixed at 1.0.
    pub fn manual(
        entity_type: impl Into<String>,
        text: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        let entity_type = entity_type.into();
        Self {
            id: EntityId::new(),
            entity_type: entity_type.clone(),
            text: text.into(),
            start,
            end,
            score: 1.0,
            excluded: false,
            original_type: entity_type,
        }
    }

    /// Whether the current type differs from the type at detection time
    pub fn is_reclassified(&self) -> bool {
        self.entity_type != self.original_type
    }

    /// Whether this entity's span intersects `[start, end)`
    ///
    /// Open-interval intersection: covers containment in either direction
    /// and partial overlap, but not mere adjacency.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// Case-insensitive surface-text comparison, the propagation key for
    /// exclude/include/reclassify fan-out
    pub fn text_matches(&self, other: &str) -> bool {
        self.text.to_lowercase() == other.to_lowercase()
    }
}

/// A complete detection result from the analysis service
///
/// The `anonymized_text` field is what the service rendered server-side;
/// the core ignores it and recomputes the anonymized text from the editable
/// entity set, so user edits are reflected without a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// The original input text; all entity offsets reference this string
    pub original_text: String,
    /// Server-side rendering, ignored by the core
    pub anonymized_text: String,
    /// Detected entities, in detection order
    #[serde(default)]
    pub entities: Vec<DetectedEntity>,
    /// Style the service applied to `anonymized_text`
    pub anonymization_style: String,
}
