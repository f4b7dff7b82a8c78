//! Text-keyed entity grouping
//!
//! Derives a read-only grouping of the editable set by case-insensitive
//! surface text, for bulk review: one logical entity, many occurrences.
//! This is a pure projection with no state of its own; mutations go back
//! through the store's per-id operations, which fan out by text match, so
//! the view stays consistent automatically.

use crate::domain::{EditableEntity, EntityId};
use std::collections::HashMap;

/// One group of entities sharing the same surface text
#[derive(Debug, Clone, PartialEq)]
pub struct EntityGroup {
    /// Representative surface text (first member's casing)
    pub text: String,
    /// Representative current type (first member)
    pub entity_type: String,
    /// Representative detection-time type (first member)
    pub original_type: String,
    /// Representative confidence score (first member)
    pub score: f32,
    /// Start offset of the first occurrence
    pub start: usize,
    /// Number of occurrences
    pub count: usize,
    /// True when every member is excluded
    pub all_excluded: bool,
    /// True when the representative's current type differs from its
    /// detection-time type
    pub is_reclassified: bool,
    /// Member ids, in occurrence order, for routing edits back per-id
    pub member_ids: Vec<EntityId>,
}

/// Group entities by lowercased surface text
///
/// Representative fields come from the first member in array order, and
/// groups keep first-occurrence order. The store keeps its set sorted by
/// start, so in practice groups appear in document order.
pub fn group_entities(entities: &[EditableEntity]) -> Vec<EntityGroup> {
    let mut groups: Vec<EntityGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entity in entities {
        let key = entity.text.to_lowercase();
        match index.get(&key) {
            Some(&i) => {
                let group = &mut groups[i];
                group.count += 1;
                group.all_excluded &= entity.excluded;
                group.member_ids.push(entity.id);
            }
            None => {
                index.insert(key, groups.len());
                groups.push(EntityGroup {
                    text: entity.text.clone(),
                    entity_type: entity.entity_type.clone(),
                    original_type: entity.original_type.clone(),
                    score: entity.score,
                    start: entity.start,
                    count: 1,
                    all_excluded: entity.excluded,
                    is_reclassified: entity.is_reclassified(),
                    member_ids: vec![entity.id],
                });
            }
        }
    }

    groups
}
