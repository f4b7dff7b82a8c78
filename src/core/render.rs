//! Anonymized-text rendering
//!
//! Turns the editable entity set back into display text by substituting
//! every non-excluded span with a style-dependent replacement token.
//!
//! Substitution proceeds **end-to-start** (entities sorted by descending
//! start): replacing a span changes the length of everything after it, so
//! working from the highest offset down keeps all remaining character
//! offsets valid against the unmodified prefix.

use crate::core::offset::{byte_offset, char_len};
use crate::domain::{AnonymizationStyle, EditableEntity};
use sha2::{Digest, Sha256};

/// Fixed-length mask token, independent of the original span length
///
/// Deliberately not length-preserving: a mask that mirrors the original
/// length leaks it.
pub const MASK_TOKEN: &str = "******";

/// Fixed redaction marker
pub const REDACT_TOKEN: &str = "[REDACTED]";

/// Replacement token for one entity type under the given style
pub fn replacement_token(style: AnonymizationStyle, entity_type: &str) -> String {
    match style {
        AnonymizationStyle::Replace => format!("<{entity_type}>"),
        AnonymizationStyle::Mask => MASK_TOKEN.to_string(),
        AnonymizationStyle::Hash => hash_token(entity_type),
        AnonymizationStyle::Redact => REDACT_TOKEN.to_string(),
    }
}

/// Short deterministic placeholder derived from the type label
///
/// A display placeholder, not a security feature: it hashes the category
/// label, never the covered text, so every PERSON span renders the same.
fn hash_token(entity_type: &str) -> String {
    let digest = Sha256::digest(entity_type.as_bytes());
    let hex: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
    format!("#{hex}")
}

/// Render the anonymized text for the given entity set
///
/// Excluded entities keep their original text. Remaining entities are
/// substituted end-to-start. Should the set contain detection-time
/// overlaps, each span's end is clamped to the start of the previously
/// substituted span, so the last entity touching an offset wins.
pub fn render_anonymized(
    source: &str,
    entities: &[EditableEntity],
    style: AnonymizationStyle,
) -> String {
    let mut active: Vec<&EditableEntity> =
        entities.iter().filter(|e| !e.excluded).collect();
    // Descending start; stable, so detection order breaks ties
    active.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = source.to_string();
    let mut previous_start = char_len(source);

    for entity in active {
        let end = entity.end.min(previous_start);
        if entity.start >= end {
            continue;
        }
        // Byte offsets computed against the original text stay valid:
        // only the suffix beyond `end` has been rewritten so far.
        let byte_start = byte_offset(source, entity.start);
        let byte_end = byte_offset(source, end);
        result.replace_range(
            byte_start..byte_end,
            &replacement_token(style, &entity.entity_type),
        );
        previous_start = entity.start;
    }

    result
}
