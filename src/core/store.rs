//! Entity store
//!
//! Single source of truth for per-document entity edit state and the
//! derivation of the final anonymized text. One detection result at a time:
//! [`EntityStore::initialize`] replaces everything, individual edits mutate
//! in place, and every derived view is a pure function recomputed from the
//! current set on read.
//!
//! # Edit propagation
//!
//! Exclude, include, and reclassify fan out to **every** entity whose
//! surface text matches case-insensitively. Identical mentions share
//! visibility and classification so the user doesn't repeat a decision
//! per occurrence. The propagation key is exact lowercased text, never
//! fuzzy matching.
//!
//! # Failure semantics
//!
//! Edit operations never fail: an unknown id or an already-consistent
//! state is a silent no-op. Stale ids are an expected consequence of
//! UI-driven editing, not an error.
//!
//! # Concurrency
//!
//! The store is single-threaded by construction: all mutations and
//! derivations run synchronously on the UI's logical thread, so there is
//! exactly one mutator at a time and no locking. UI layers subscribe to
//! change notifications instead of relying on framework reactivity.

use crate::core::annotate::annotate_selection;
use crate::core::groups::{group_entities, EntityGroup};
use crate::core::render::render_anonymized;
use crate::core::segments::{resolve_segments, TextSegment};
use crate::domain::{
    AnonymizationStyle, DetectedEntity, EditableEntity, EntityId,
};

/// What changed in the store, passed to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// A new detection result replaced the editable set
    Initialized,
    /// Exclusion state changed for one or more entities
    ExclusionChanged,
    /// One or more entities were reclassified
    Reclassified,
    /// Manual entities were added
    Annotated,
    /// All edits were discarded and the set rebuilt from the detection
    Reset,
}

type Subscriber = Box<dyn Fn(StoreChange)>;

/// Editable entity set for one document
///
/// Created empty; before the first [`initialize`](Self::initialize) every
/// derived view returns its neutral default (empty text, no entities, no
/// groups), never an error.
#[derive(Default)]
pub struct EntityStore {
    source_text: String,
    /// Pristine detection result, kept for [`reset_edits`](Self::reset_edits)
    detected: Vec<DetectedEntity>,
    entities: Vec<EditableEntity>,
    subscribers: Vec<Subscriber>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the editable set with a fresh detection result
    ///
    /// Every detected entity gets a fresh id, `excluded = false`, and its
    /// detection-time type recorded as `original_type`. All prior edit
    /// state, including in-flight edits for the previous document, is
    /// discarded. Entities are sorted by start; detection order breaks ties.
    pub fn initialize(&mut self, source_text: impl Into<String>, entities: Vec<DetectedEntity>) {
        self.source_text = source_text.into();
        self.entities = entities.iter().map(EditableEntity::from_detected).collect();
        self.entities.sort_by_key(|e| e.start);
        self.detected = entities;
        tracing::debug!(
            entity_count = self.entities.len(),
            "Initialized entity store from detection result"
        );
        self.notify(StoreChange::Initialized);
    }

    /// The immutable source text of the current detection result
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The editable set, sorted by start offset
    pub fn entities(&self) -> &[EditableEntity] {
        &self.entities
    }

    /// Look up an entity by id
    pub fn entity(&self, id: EntityId) -> Option<&EditableEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Mark the entity and all its case-insensitive text twins as excluded
    ///
    /// Excluded entities render as their original text. Unknown ids are a
    /// no-op.
    pub fn exclude(&mut self, id: EntityId) {
        self.set_excluded(id, true);
    }

    /// Undo [`exclude`](Self::exclude) for the entity and its text twins
    pub fn include(&mut self, id: EntityId) {
        self.set_excluded(id, false);
    }

    fn set_excluded(&mut self, id: EntityId, excluded: bool) {
        let Some(text) = self.entity(id).map(|e| e.text.clone()) else {
            tracing::debug!(%id, "Ignoring exclusion change for unknown entity id");
            return;
        };
        for entity in &mut self.entities {
            if entity.text_matches(&text) {
                entity.excluded = excluded;
            }
        }
        self.notify(StoreChange::ExclusionChanged);
    }

    /// Change the effective type of the entity and all its text twins
    ///
    /// Sets `entity_type = new_type` on every case-insensitive text match,
    /// regardless of each match's own detection-time type, so differing
    /// original detections sharing text converge to one label.
    /// `original_type` is left untouched to preserve provenance for the
    /// "was X" indicator. Unknown ids are a no-op.
    pub fn reclassify(&mut self, id: EntityId, new_type: &str) {
        let Some(text) = self.entity(id).map(|e| e.text.clone()) else {
            tracing::debug!(%id, "Ignoring reclassify for unknown entity id");
            return;
        };
        for entity in &mut self.entities {
            if entity.text_matches(&text) {
                entity.entity_type = new_type.to_string();
            }
        }
        self.notify(StoreChange::Reclassified);
    }

    /// Annotate every non-overlapping occurrence of a selected substring
    ///
    /// Scans the source case-insensitively, drops candidates intersecting
    /// an existing entity, materializes the rest with score 1.0 and fresh
    /// ids, merges them in, and re-sorts by start. Returns the number of
    /// entities actually created, which is 0 for blank selections or when
    /// every occurrence collided.
    pub fn annotate(&mut self, selection: &str, entity_type: &str) -> usize {
        let created = annotate_selection(&self.source_text, selection, entity_type, &self.entities);
        let count = created.len();
        if count == 0 {
            return 0;
        }
        self.entities.extend(created);
        self.entities.sort_by_key(|e| e.start);
        tracing::debug!(count, entity_type, "Added manual annotations");
        self.notify(StoreChange::Annotated);
        count
    }

    /// Discard all edits and rebuild the set from the original detection
    ///
    /// Equivalent to re-running [`initialize`](Self::initialize) with the
    /// stored detection result: exclusions, reclassifications, and manual
    /// entities are gone, and every entity gets a fresh id.
    pub fn reset_edits(&mut self) {
        self.entities = self.detected.iter().map(EditableEntity::from_detected).collect();
        self.entities.sort_by_key(|e| e.start);
        tracing::debug!("Reset entity edits to detection result");
        self.notify(StoreChange::Reset);
    }

    /// Whether any edit diverges from the pristine detection result
    pub fn has_edits(&self) -> bool {
        self.entities.len() != self.detected.len()
            || self
                .entities
                .iter()
                .any(|e| e.excluded || e.is_reclassified())
    }

    /// Render the anonymized text under the given style
    ///
    /// Pure derivation: non-excluded entities are substituted end-to-start
    /// (descending start order) so earlier offsets stay valid while later
    /// spans are replaced. See [`crate::core::render`].
    pub fn anonymized_text(&self, style: AnonymizationStyle) -> String {
        render_anonymized(&self.source_text, &self.entities, style)
    }

    /// Group the set by case-insensitive text for bulk review
    pub fn grouped_entities(&self) -> Vec<EntityGroup> {
        group_entities(&self.entities)
    }

    /// Partition the source text into renderable segments
    pub fn original_text_segments(&self) -> Vec<TextSegment> {
        resolve_segments(&self.source_text, &self.entities)
    }

    /// Register a change subscriber
    ///
    /// Subscribers are invoked synchronously after each effective mutation,
    /// on the same thread. Typical use is scheduling a re-read of the
    /// derived views.
    pub fn subscribe(&mut self, subscriber: impl Fn(StoreChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self, change: StoreChange) {
        for subscriber in &self.subscribers {
            subscriber(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn detected(entity_type: &str, text: &str, start: usize, score: f32) -> DetectedEntity {
        let end = start + text.chars().count();
        DetectedEntity::new(entity_type, text, start, end, score)
    }

    fn sample_store() -> EntityStore {
        let mut store = EntityStore::new();
        store.initialize(
            "Hans Müller wohnt in Zürich. Müller arbeitet dort.",
            vec![
                detected("PERSON", "Hans", 0, 0.95),
                detected("PERSON", "Müller", 5, 0.9),
                detected("LOCATION", "Zürich", 21, 0.85),
                detected("PERSON", "Müller", 29, 0.9),
            ],
        );
        store
    }

    #[test]
    fn test_empty_store_neutral_defaults() {
        let store = EntityStore::new();
        assert!(store.entities().is_empty());
        assert!(!store.has_edits());
        assert!(store.grouped_entities().is_empty());
        assert_eq!(store.anonymized_text(AnonymizationStyle::Replace), "");
        // One empty plain segment, never an empty list
        assert_eq!(store.original_text_segments().len(), 1);
    }

    #[test]
    fn test_initialize_sorts_by_start_with_fresh_state() {
        let mut store = EntityStore::new();
        store.initialize(
            "Hans Müller",
            vec![detected("PERSON", "Müller", 5, 0.9), detected("PERSON", "Hans", 0, 0.95)],
        );
        let starts: Vec<usize> = store.entities().iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![0, 5]);
        assert!(store.entities().iter().all(|e| !e.excluded));
        assert!(!store.has_edits());
    }

    #[test]
    fn test_exclude_propagates_to_text_twins() {
        let mut store = sample_store();
        let first_mueller = store.entities()[1].id;
        store.exclude(first_mueller);

        let excluded: Vec<bool> = store.entities().iter().map(|e| e.excluded).collect();
        assert_eq!(excluded, vec![false, true, false, true]);
        assert!(store.has_edits());

        store.include(first_mueller);
        assert!(store.entities().iter().all(|e| !e.excluded));
        assert!(!store.has_edits());
    }

    #[test]
    fn test_exclude_unknown_id_is_noop() {
        let mut store = sample_store();
        store.exclude(EntityId::new());
        assert!(store.entities().iter().all(|e| !e.excluded));
        assert!(!store.has_edits());
    }

    #[test]
    fn test_reclassify_propagates_but_keeps_provenance() {
        let mut store = sample_store();
        let second_mueller = store.entities()[3].id;
        store.reclassify(second_mueller, "ORG");

        let muellers: Vec<&EditableEntity> = store
            .entities()
            .iter()
            .filter(|e| e.text == "Müller")
            .collect();
        assert_eq!(muellers.len(), 2);
        for entity in muellers {
            assert_eq!(entity.entity_type, "ORG");
            assert_eq!(entity.original_type, "PERSON");
            assert!(entity.is_reclassified());
        }
        assert!(store.has_edits());
    }

    #[test]
    fn test_render_reflects_exclusion_and_reclassification() {
        let mut store = sample_store();
        let hans = store.entities()[0].id;
        store.exclude(hans);
        let zurich = store
            .entities()
            .iter()
            .find(|e| e.text == "Zürich")
            .unwrap()
            .id;
        store.reclassify(zurich, "CITY");

        assert_eq!(
            store.anonymized_text(AnonymizationStyle::Replace),
            "Hans <PERSON> wohnt in <CITY>. <PERSON> arbeitet dort."
        );
    }

    #[test]
    fn test_annotate_merges_and_resorts() {
        let mut store = sample_store();
        let created = store.annotate("wohnt", "ACTIVITY");
        assert_eq!(created, 1);
        let starts: Vec<usize> = store.entities().iter().map(|e| e.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        assert!(store.has_edits());
    }

    #[test]
    fn test_annotate_rejects_overlapping_occurrences() {
        let mut store = sample_store();
        // "Müller" occurrences all sit inside existing entities
        assert_eq!(store.annotate("Müller", "ORG"), 0);
        assert!(!store.has_edits());
    }

    #[test]
    fn test_annotate_blank_selection_is_noop() {
        let mut store = sample_store();
        assert_eq!(store.annotate("  ", "PERSON"), 0);
        assert_eq!(store.annotate("", "PERSON"), 0);
    }

    #[test]
    fn test_reset_restores_pristine_state_with_fresh_ids() {
        let mut store = sample_store();
        let ids_before: Vec<EntityId> = store.entities().iter().map(|e| e.id).collect();

        store.exclude(store.entities()[0].id);
        store.reclassify(store.entities()[1].id, "ORG");
        store.annotate("dort", "MISC");
        assert!(store.has_edits());

        store.reset_edits();
        assert!(!store.has_edits());
        assert_eq!(store.entities().len(), 4);
        for entity in store.entities() {
            assert!(!entity.excluded);
            assert!(!entity.is_reclassified());
            assert!(!ids_before.contains(&entity.id));
        }
    }

    #[test]
    fn test_initialize_replaces_previous_document() {
        let mut store = sample_store();
        store.exclude(store.entities()[0].id);

        store.initialize("Neuer Text", vec![detected("MISC", "Neuer", 0, 0.7)]);
        assert_eq!(store.entities().len(), 1);
        assert!(!store.has_edits());
        assert_eq!(store.source_text(), "Neuer Text");
    }

    #[test]
    fn test_subscribers_notified_per_mutation() {
        let changes: Rc<RefCell<Vec<StoreChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);

        let mut store = EntityStore::new();
        store.subscribe(move |change| sink.borrow_mut().push(change));

        store.initialize("Hans", vec![detected("PERSON", "Hans", 0, 0.9)]);
        let id = store.entities()[0].id;
        store.exclude(id);
        store.reclassify(id, "ORG");
        store.annotate("nix", "MISC"); // no match, no notification
        store.reset_edits();

        assert_eq!(
            *changes.borrow(),
            vec![
                StoreChange::Initialized,
                StoreChange::ExclusionChanged,
                StoreChange::Reclassified,
                StoreChange::Reset,
            ]
        );
    }

    #[test]
    fn test_render_idempotent_after_initialize() {
        let store = sample_store();
        for style in AnonymizationStyle::ALL {
            let first = store.anonymized_text(style);
            let second = store.anonymized_text(style);
            assert_eq!(first, second);
        }
    }
}
