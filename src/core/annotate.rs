//! Manual annotation engine
//!
//! Converts a user-selected substring plus a chosen type into zero or more
//! new entities: every case-insensitive occurrence of the selection in the
//! source text becomes a candidate, candidates that intersect an existing
//! entity's span are dropped, and the survivors are materialized with a
//! score of 1.0.

use crate::core::offset::chars_eq_ignore_case;
use crate::domain::EditableEntity;

/// Find every case-insensitive occurrence of `term` in `source`
///
/// Returns half-open character intervals. The scan advances the cursor by
/// exactly one character after each match, so occurrences of the term may
/// overlap each other ("aa" in "aaa" yields `[0,2)` and `[1,3)`); overlap
/// against existing entities is the caller's filter.
pub fn find_occurrences(source: &str, term: &str) -> Vec<(usize, usize)> {
    let term_chars: Vec<char> = term.chars().collect();
    if term_chars.is_empty() {
        return Vec::new();
    }
    let source_chars: Vec<char> = source.chars().collect();
    if source_chars.len() < term_chars.len() {
        return Vec::new();
    }

    let mut occurrences = Vec::new();
    for start in 0..=(source_chars.len() - term_chars.len()) {
        let matches = term_chars
            .iter()
            .zip(&source_chars[start..start + term_chars.len()])
            .all(|(&t, &s)| chars_eq_ignore_case(t, s));
        if matches {
            occurrences.push((start, start + term_chars.len()));
        }
    }
    occurrences
}

/// Materialize manual entities for a selection
///
/// Rejects empty or whitespace-only selections. Each surviving occurrence
/// keeps the source text's own casing, not the selection's, so the cached
/// text always equals the covered span. Returned entities are not yet
/// merged into any set; the store does that and re-sorts.
pub fn annotate_selection(
    source: &str,
    selection: &str,
    entity_type: &str,
    existing: &[EditableEntity],
) -> Vec<EditableEntity> {
    if selection.trim().is_empty() {
        return Vec::new();
    }

    let source_chars: Vec<char> = source.chars().collect();
    find_occurrences(source, selection)
        .into_iter()
        .filter(|&(start, end)| !existing.iter().any(|e| e.overlaps(start, end)))
        .map(|(start, end)| {
            let text: String = source_chars[start..end].iter().collect();
            EditableEntity::manual(entity_type, text, start, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_all_occurrences_case_insensitive() {
        let occurrences = find_occurrences("Hans traf hans und HANS", "hans");
        assert_eq!(occurrences, vec![(0, 4), (10, 14), (19, 23)]);
    }

    #[test]
    fn test_overlapping_term_matches_allowed() {
        assert_eq!(find_occurrences("aaa", "aa"), vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn test_multibyte_offsets_are_char_based() {
        assert_eq!(find_occurrences("Zürich und zürich", "zürich"), vec![(0, 6), (11, 17)]);
    }

    #[test]
    fn test_term_longer_than_source() {
        assert!(find_occurrences("ab", "abc").is_empty());
    }

    #[test]
    fn test_rejects_blank_selection() {
        assert!(annotate_selection("some text", "", "PERSON", &[]).is_empty());
        assert!(annotate_selection("some text", "   ", "PERSON", &[]).is_empty());
    }

    #[test]
    fn test_rejects_occurrences_overlapping_existing() {
        // Existing entity [5,10); candidate "fghij" would be [5,10) too
        let existing = vec![EditableEntity::manual("PERSON", "fghij", 5, 10)];
        let source = "abcdefghijklmno fghij";
        let created = annotate_selection(source, "fghij", "LOCATION", &existing);
        // The occurrence inside the existing span is dropped, the later
        // disjoint one at [16,21) survives
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].start, 16);
        assert_eq!(created[0].end, 21);
    }

    #[test]
    fn test_partial_overlap_rejected() {
        let existing = vec![EditableEntity::manual("PERSON", "xxxxx", 5, 10)];
        // Candidate [8,12) partially overlaps [5,10)
        let source = "aaaaabbbccddZZZZ";
        let created = annotate_selection(source, "ccdd", "LOCATION", &existing);
        assert!(created.is_empty());
    }

    #[test]
    fn test_created_entities_use_source_casing_and_score_one() {
        let created = annotate_selection("Frau MÜLLER war da", "müller", "PERSON", &[]);
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].text, "MÜLLER");
        assert_eq!(created[0].score, 1.0);
        assert_eq!(created[0].original_type, "PERSON");
        assert_eq!(created[0].entity_type, "PERSON");
    }

    #[test]
    fn test_adjacent_occurrence_is_not_overlap() {
        let existing = vec![EditableEntity::manual("PERSON", "abcde", 0, 5)];
        let created = annotate_selection("abcdeabcde", "abcde", "LOCATION", &existing);
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].start, 5);
    }
}
