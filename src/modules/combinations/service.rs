use classtree_models::{Combination, CombinationId, GradeId, NodePatch, next_order};
use classtree_observability::track_hierarchy_mutation;
use tracing::{debug, instrument, warn};

use crate::store::{ClassesStore, find_grade_mut};

pub struct CombinationService;

impl CombinationService {
    /// Append a subject stream to a grade. Returns `None` if the grade does
    /// not exist. Like sections, streams are accepted regardless of the
    /// advisory capability checks.
    #[instrument(skip(store))]
    pub fn add_combination<'s>(
        store: &'s mut ClassesStore,
        grade_id: GradeId,
        name: &str,
        order: Option<i32>,
    ) -> Option<&'s Combination> {
        let ClassesStore { levels, ids, .. } = store;
        let Some(grade) = find_grade_mut(levels, grade_id) else {
            warn!("Grade not found");
            return None;
        };

        let combination = Combination {
            id: ids.next_id(),
            grade_id,
            name: name.to_string(),
            order: order.unwrap_or_else(|| next_order(&grade.combinations)),
        };
        debug!(combination_id = %combination.id, "Combination added");
        track_hierarchy_mutation("combination", "create");

        grade.combinations.push(combination);
        grade.combinations.last()
    }

    #[instrument(skip(store))]
    pub fn update_combination<'s>(
        store: &'s mut ClassesStore,
        grade_id: GradeId,
        combination_id: CombinationId,
        patch: &NodePatch,
    ) -> Option<&'s Combination> {
        let Some(combination) = find_grade_mut(&mut store.levels, grade_id).and_then(|grade| {
            grade
                .combinations
                .iter_mut()
                .find(|c| c.id == combination_id)
        }) else {
            warn!("Combination not found");
            return None;
        };

        patch.apply(&mut combination.name, &mut combination.order);
        track_hierarchy_mutation("combination", "update");
        Some(&*combination)
    }

    #[instrument(skip(store))]
    pub fn delete_combination(
        store: &mut ClassesStore,
        grade_id: GradeId,
        combination_id: CombinationId,
    ) -> bool {
        let Some(grade) = find_grade_mut(&mut store.levels, grade_id) else {
            warn!("Grade not found");
            return false;
        };

        let before = grade.combinations.len();
        grade.combinations.retain(|c| c.id != combination_id);
        if grade.combinations.len() == before {
            warn!("Combination not found");
            return false;
        }

        track_hierarchy_mutation("combination", "delete");
        true
    }

    pub fn find_combination(
        store: &ClassesStore,
        combination_id: CombinationId,
    ) -> Option<&Combination> {
        store
            .grades()
            .flat_map(|g| g.combinations.iter())
            .find(|c| c.id == combination_id)
    }
}
