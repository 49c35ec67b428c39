use classtree_models::{Grade, GradeId, LevelId, NodePatch, next_order};
use classtree_observability::track_hierarchy_mutation;
use tracing::{debug, instrument, warn};

use crate::modules::levels::LevelService;
use crate::store::{ClassesStore, find_level_mut};

pub struct GradeService;

impl GradeService {
    /// Append a grade to a level. Returns `None` if the level does not exist.
    #[instrument(skip(store))]
    pub fn add_grade<'s>(
        store: &'s mut ClassesStore,
        level_id: LevelId,
        name: &str,
        order: Option<i32>,
    ) -> Option<&'s Grade> {
        let ClassesStore { levels, ids, .. } = store;
        let Some(level) = find_level_mut(levels, level_id) else {
            warn!("Level not found");
            return None;
        };

        let grade = Grade {
            id: ids.next_id(),
            level_id,
            name: name.to_string(),
            order: order.unwrap_or_else(|| next_order(&level.grades)),
            sub_grades: Vec::new(),
            combinations: Vec::new(),
        };
        debug!(grade_id = %grade.id, order = grade.order, "Grade added");
        track_hierarchy_mutation("grade", "create");

        level.grades.push(grade);
        level.grades.last()
    }

    #[instrument(skip(store))]
    pub fn update_grade<'s>(
        store: &'s mut ClassesStore,
        level_id: LevelId,
        grade_id: GradeId,
        patch: &NodePatch,
    ) -> Option<&'s Grade> {
        let Some(grade) = find_level_mut(&mut store.levels, level_id)
            .and_then(|level| level.grades.iter_mut().find(|g| g.id == grade_id))
        else {
            warn!("Grade not found");
            return None;
        };

        patch.apply(&mut grade.name, &mut grade.order);
        track_hierarchy_mutation("grade", "update");
        Some(&*grade)
    }

    /// Remove a grade with its sub-grades and combinations.
    #[instrument(skip(store))]
    pub fn delete_grade(store: &mut ClassesStore, level_id: LevelId, grade_id: GradeId) -> bool {
        let Some(level) = find_level_mut(&mut store.levels, level_id) else {
            warn!("Level not found");
            return false;
        };
        let Some(index) = level.grades.iter().position(|g| g.id == grade_id) else {
            warn!("Grade not found");
            return false;
        };

        let removed = level.grades.remove(index);
        debug!(
            sub_grades = removed.sub_grades.len(),
            combinations = removed.combinations.len(),
            "Grade deleted"
        );
        track_hierarchy_mutation("grade", "delete");
        true
    }

    /// Linear search across every level.
    pub fn find_grade(store: &ClassesStore, grade_id: GradeId) -> Option<&Grade> {
        store.grades().find(|g| g.id == grade_id)
    }

    /// Case-insensitive lookup among one level's grades.
    pub fn find_grade_by_name<'s>(
        store: &'s ClassesStore,
        level_id: LevelId,
        name: &str,
    ) -> Option<&'s Grade> {
        let needle = name.trim().to_lowercase();
        LevelService::find_level(store, level_id)?
            .grades
            .iter()
            .find(|g| g.name.trim().to_lowercase() == needle)
    }
}
