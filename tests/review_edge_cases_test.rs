//! Edge-case tests for the review engine
//!
//! Covers boundary conditions: empty documents, entities at text
//! boundaries, multibyte offsets, overlap handling, and edit-state
//! visibility in the derived views.

use anonymize::core::{EntityStore, TextSegment};
use anonymize::domain::{AnonymizationStyle, DetectedEntity, EntityId};

fn detected(entity_type: &str, text: &str, start: usize, end: usize) -> DetectedEntity {
    DetectedEntity::new(entity_type, text, start, end, 0.8)
}

#[test]
fn test_empty_document() {
    let mut store = EntityStore::new();
    store.initialize("", Vec::new());

    assert_eq!(store.anonymized_text(AnonymizationStyle::Replace), "");
    assert!(store.grouped_entities().is_empty());
    let segments = store.original_text_segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].content(), "");
    assert!(!segments[0].is_entity());
}

#[test]
fn test_document_without_detections() {
    let mut store = EntityStore::new();
    store.initialize("Keine Treffer hier.", Vec::new());

    assert_eq!(
        store.anonymized_text(AnonymizationStyle::Mask),
        "Keine Treffer hier."
    );
    assert_eq!(store.original_text_segments().len(), 1);
    assert!(!store.has_edits());
}

#[test]
fn test_entity_spanning_entire_source() {
    let mut store = EntityStore::new();
    store.initialize("Zürich", vec![detected("LOCATION", "Zürich", 0, 6)]);

    assert_eq!(
        store.anonymized_text(AnonymizationStyle::Replace),
        "<LOCATION>"
    );
    let segments = store.original_text_segments();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_entity());
}

#[test]
fn test_adjacent_entities_no_gap_segment() {
    let mut store = EntityStore::new();
    store.initialize(
        "HansMüller",
        vec![
            detected("PERSON", "Hans", 0, 4),
            detected("PERSON", "Müller", 4, 10),
        ],
    );

    let segments = store.original_text_segments();
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(TextSegment::is_entity));
    assert_eq!(
        store.anonymized_text(AnonymizationStyle::Replace),
        "<PERSON><PERSON>"
    );
}

#[test]
fn test_multibyte_offsets_throughout() {
    // Every span offset here counts characters, not bytes
    let text = "Frau Müller überwies CHF 200 an Herrn Lüthi in Zürich";
    let mut store = EntityStore::new();
    store.initialize(
        text,
        vec![
            detected("PERSON", "Müller", 5, 11),
            detected("PERSON", "Lüthi", 38, 43),
            detected("LOCATION", "Zürich", 47, 53),
        ],
    );

    assert_eq!(
        store.anonymized_text(AnonymizationStyle::Replace),
        "Frau <PERSON> überwies CHF 200 an Herrn <PERSON> in <LOCATION>"
    );
    let reconstructed: String = store
        .original_text_segments()
        .iter()
        .map(TextSegment::content)
        .collect();
    assert_eq!(reconstructed, text);
}

#[test]
fn test_exclude_everything_restores_source() {
    let mut store = EntityStore::new();
    store.initialize(
        "Hans und Vreni",
        vec![
            detected("PERSON", "Hans", 0, 4),
            detected("PERSON", "Vreni", 9, 14),
        ],
    );
    let ids: Vec<EntityId> = store.entities().iter().map(|e| e.id).collect();
    for id in ids {
        store.exclude(id);
    }

    for style in AnonymizationStyle::ALL {
        assert_eq!(store.anonymized_text(style), "Hans und Vreni");
    }
}

#[test]
fn test_detection_time_overlap_is_tolerated() {
    // The service should not emit overlapping spans, but the views must
    // stay coherent if it does
    let mut store = EntityStore::new();
    store.initialize(
        "abcdefghi",
        vec![detected("A", "abcdef", 0, 6), detected("B", "efghi", 4, 9)],
    );

    assert_eq!(
        store.anonymized_text(AnonymizationStyle::Replace),
        "<A><B>"
    );
    let reconstructed: String = store
        .original_text_segments()
        .iter()
        .map(TextSegment::content)
        .collect();
    assert_eq!(reconstructed, "abcdefghi");
}

#[test]
fn test_grouping_merges_casing_variants() {
    let mut store = EntityStore::new();
    store.initialize(
        "HANS traf Hans und hans",
        vec![
            detected("PERSON", "HANS", 0, 4),
            detected("PERSON", "Hans", 10, 14),
            detected("PERSON", "hans", 19, 23),
        ],
    );

    let groups = store.grouped_entities();
    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.count, 3);
    // Representative fields come from the first occurrence
    assert_eq!(group.text, "HANS");
    assert_eq!(group.start, 0);
    assert_eq!(group.member_ids.len(), 3);
}

#[test]
fn test_group_excluded_flag_requires_all_members() {
    let mut store = EntityStore::new();
    store.initialize(
        "Hans und Vreni und Hans",
        vec![
            detected("PERSON", "Hans", 0, 4),
            detected("PERSON", "Vreni", 9, 14),
            detected("PERSON", "Hans", 19, 23),
        ],
    );
    let vreni = store
        .entities()
        .iter()
        .find(|e| e.text == "Vreni")
        .unwrap()
        .id;
    store.exclude(vreni);

    let groups = store.grouped_entities();
    let hans = groups.iter().find(|g| g.text == "Hans").unwrap();
    let vreni_group = groups.iter().find(|g| g.text == "Vreni").unwrap();
    assert!(!hans.all_excluded);
    assert!(vreni_group.all_excluded);
}

#[test]
fn test_groups_preserve_first_occurrence_order() {
    let mut store = EntityStore::new();
    store.initialize(
        "Vreni traf Hans, dann traf Vreni Beat",
        vec![
            detected("PERSON", "Vreni", 0, 5),
            detected("PERSON", "Hans", 11, 15),
            detected("PERSON", "Vreni", 27, 32),
            detected("PERSON", "Beat", 33, 37),
        ],
    );

    let groups = store.grouped_entities();
    let names: Vec<&str> = groups
        .iter()
        .map(|g| g.text.as_str())
        .collect();
    assert_eq!(names, vec!["Vreni", "Hans", "Beat"]);
}

#[test]
fn test_segments_carry_current_edit_state() {
    let mut store = EntityStore::new();
    store.initialize("Hans wohnt hier", vec![detected("PERSON", "Hans", 0, 4)]);
    let id = store.entities()[0].id;
    store.exclude(id);
    store.reclassify(id, "ORG");

    let segments = store.original_text_segments();
    match &segments[0] {
        TextSegment::Entity { entity, .. } => {
            assert!(entity.excluded);
            assert_eq!(entity.entity_type, "ORG");
            assert_eq!(entity.original_type, "PERSON");
        }
        other => panic!("expected entity segment, got {other:?}"),
    }
}

#[test]
fn test_annotate_whole_source() {
    let mut store = EntityStore::new();
    store.initialize("756.1234.5678.97", Vec::new());

    assert_eq!(store.annotate("756.1234.5678.97", "CH_AHV"), 1);
    assert_eq!(
        store.anonymized_text(AnonymizationStyle::Replace),
        "<CH_AHV>"
    );
}

#[test]
fn test_annotate_selection_not_present_is_noop() {
    let mut store = EntityStore::new();
    store.initialize("Hans wohnt hier", vec![detected("PERSON", "Hans", 0, 4)]);

    assert_eq!(store.annotate("Bern", "LOCATION"), 0);
    assert_eq!(store.entities().len(), 1);
    assert!(!store.has_edits());
}

#[test]
fn test_manual_entities_participate_in_propagation() {
    let mut store = EntityStore::new();
    store.initialize("Projekt Alpha und alpha nochmals", Vec::new());
    assert_eq!(store.annotate("alpha", "PROJECT"), 2);

    let first = store.entities()[0].id;
    store.exclude(first);
    assert!(store.entities().iter().all(|e| e.excluded));
    assert_eq!(
        store.anonymized_text(AnonymizationStyle::Replace),
        "Projekt Alpha und alpha nochmals"
    );
}

#[test]
fn test_score_is_clamped_to_unit_interval() {
    let high = DetectedEntity::new("PERSON", "Hans", 0, 4, 1.7);
    let low = DetectedEntity::new("PERSON", "Hans", 0, 4, -0.3);
    assert_eq!(high.score, 1.0);
    assert_eq!(low.score, 0.0);
}

#[test]
fn test_style_parsing_round_trip() {
    for style in AnonymizationStyle::ALL {
        let parsed: AnonymizationStyle = style.as_str().parse().unwrap();
        assert_eq!(parsed, style);
    }
    assert!("shred".parse::<AnonymizationStyle>().is_err());
}
