use classtree_models::{Level, LevelId, NodePatch, next_order};
use classtree_observability::track_hierarchy_mutation;
use tracing::{debug, instrument, warn};

use crate::store::{ClassesStore, find_level_mut};

pub struct LevelService;

impl LevelService {
    /// Append a level. `order` defaults to one past the highest sibling order.
    #[instrument(skip(store))]
    pub fn add_level<'s>(store: &'s mut ClassesStore, name: &str, order: Option<i32>) -> &'s Level {
        let level = Level {
            id: store.ids.next_id(),
            name: name.to_string(),
            order: order.unwrap_or_else(|| next_order(&store.levels)),
            grades: Vec::new(),
        };
        debug!(level_id = %level.id, order = level.order, "Level added");
        track_hierarchy_mutation("level", "create");

        let index = store.levels.len();
        store.levels.push(level);
        &store.levels[index]
    }

    /// Merge `patch` into a level. Returns `None` if the level does not exist.
    #[instrument(skip(store))]
    pub fn update_level<'s>(
        store: &'s mut ClassesStore,
        level_id: LevelId,
        patch: &NodePatch,
    ) -> Option<&'s Level> {
        let Some(level) = find_level_mut(&mut store.levels, level_id) else {
            warn!("Level not found");
            return None;
        };

        patch.apply(&mut level.name, &mut level.order);
        track_hierarchy_mutation("level", "update");
        Some(&*level)
    }

    /// Remove a level together with everything nested beneath it.
    #[instrument(skip(store))]
    pub fn delete_level(store: &mut ClassesStore, level_id: LevelId) -> bool {
        let Some(index) = store.levels.iter().position(|l| l.id == level_id) else {
            warn!("Level not found");
            return false;
        };

        let removed = store.levels.remove(index);
        debug!(
            grades = removed.grades.len(),
            sub_grades = removed.sub_grade_count(),
            "Level deleted"
        );
        track_hierarchy_mutation("level", "delete");
        true
    }

    pub fn find_level(store: &ClassesStore, level_id: LevelId) -> Option<&Level> {
        store.levels.iter().find(|l| l.id == level_id)
    }

    /// Case-insensitive lookup among the store's levels.
    pub fn find_level_by_name<'s>(store: &'s ClassesStore, name: &str) -> Option<&'s Level> {
        let needle = name.trim().to_lowercase();
        store
            .levels
            .iter()
            .find(|l| l.name.trim().to_lowercase() == needle)
    }
}
