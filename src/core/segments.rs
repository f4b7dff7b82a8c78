//! Offset resolver
//!
//! Partitions the source text into an ordered sequence of renderable
//! segments, alternating plain text and entity-backed spans. Used by the
//! presentation layer to highlight detections in the original text; the
//! final anonymized substitution does not go through segments (see
//! [`crate::core::render`]).

use crate::core::offset::{char_len, slice_chars};
use crate::domain::EditableEntity;

/// One renderable slice of the source text
#[derive(Debug, Clone, PartialEq)]
pub enum TextSegment {
    /// Text between entities
    Plain {
        /// The covered text
        content: String,
    },
    /// An entity-backed span
    Entity {
        /// The covered text, sliced from the source
        content: String,
        /// The backing entity, including its current edit state
        entity: EditableEntity,
    },
}

impl TextSegment {
    /// The text this segment covers
    pub fn content(&self) -> &str {
        match self {
            Self::Plain { content } => content,
            Self::Entity { content, .. } => content,
        }
    }

    /// Whether this segment is entity-backed
    pub fn is_entity(&self) -> bool {
        matches!(self, Self::Entity { .. })
    }
}

/// Resolve (source, entities) into ordered segments
///
/// Entities are sorted ascending by start (stable, so detection order
/// breaks ties) and walked once: a plain segment is emitted for every
/// non-empty gap before an entity, then the entity segment, then any
/// trailing text. Concatenating all segment contents reconstructs the
/// source exactly.
///
/// With zero entities the whole source becomes a single plain segment;
/// an empty source still yields exactly one (empty) plain segment, so
/// callers never see an empty segment list.
///
/// Correctness assumes non-overlapping input; the mutation layer prevents
/// overlap for manual additions. Should a detection-time overlap slip
/// through, an entity starting before the emission cursor is skipped, as
/// its text is already covered by an earlier segment.
pub fn resolve_segments(source: &str, entities: &[EditableEntity]) -> Vec<TextSegment> {
    let mut sorted: Vec<&EditableEntity> = entities.iter().collect();
    sorted.sort_by_key(|e| e.start);

    let total_chars = char_len(source);
    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0usize;

    for entity in sorted {
        if entity.start < cursor {
            tracing::debug!(
                entity_id = %entity.id,
                start = entity.start,
                cursor,
                "Skipping overlapping entity in segment resolution"
            );
            continue;
        }
        if entity.start > cursor {
            segments.push(TextSegment::Plain {
                content: slice_chars(source, cursor, entity.start).to_string(),
            });
        }
        segments.push(TextSegment::Entity {
            content: slice_chars(source, entity.start, entity.end).to_string(),
            entity: entity.clone(),
        });
        cursor = entity.end;
    }

    if cursor < total_chars {
        segments.push(TextSegment::Plain {
            content: slice_chars(source, cursor, total_chars).to_string(),
        });
    }

    if segments.is_empty() {
        segments.push(TextSegment::Plain {
            content: source.to_string(),
        });
    }

    segments
}
