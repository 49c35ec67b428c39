use classtree_models::{GradeId, NodePatch, SubGrade, SubGradeId, next_order};
use classtree_observability::track_hierarchy_mutation;
use tracing::{debug, instrument, warn};

use crate::store::{ClassesStore, find_grade_mut};

pub struct SubGradeService;

impl SubGradeService {
    /// Append a section to a grade. Returns `None` if the grade does not exist.
    ///
    /// Does not consult [`can_add_sub_grades`](crate::validator::can_add_sub_grades);
    /// a grade with combinations still accepts sections here.
    #[instrument(skip(store))]
    pub fn add_sub_grade<'s>(
        store: &'s mut ClassesStore,
        grade_id: GradeId,
        name: &str,
        order: Option<i32>,
    ) -> Option<&'s SubGrade> {
        let ClassesStore { levels, ids, .. } = store;
        let Some(grade) = find_grade_mut(levels, grade_id) else {
            warn!("Grade not found");
            return None;
        };

        let sub_grade = SubGrade {
            id: ids.next_id(),
            grade_id,
            name: name.to_string(),
            order: order.unwrap_or_else(|| next_order(&grade.sub_grades)),
        };
        debug!(sub_grade_id = %sub_grade.id, "Sub-grade added");
        track_hierarchy_mutation("sub_grade", "create");

        grade.sub_grades.push(sub_grade);
        grade.sub_grades.last()
    }

    #[instrument(skip(store))]
    pub fn update_sub_grade<'s>(
        store: &'s mut ClassesStore,
        grade_id: GradeId,
        sub_grade_id: SubGradeId,
        patch: &NodePatch,
    ) -> Option<&'s SubGrade> {
        let Some(sub_grade) = find_grade_mut(&mut store.levels, grade_id)
            .and_then(|grade| grade.sub_grades.iter_mut().find(|s| s.id == sub_grade_id))
        else {
            warn!("Sub-grade not found");
            return None;
        };

        patch.apply(&mut sub_grade.name, &mut sub_grade.order);
        track_hierarchy_mutation("sub_grade", "update");
        Some(&*sub_grade)
    }

    #[instrument(skip(store))]
    pub fn delete_sub_grade(
        store: &mut ClassesStore,
        grade_id: GradeId,
        sub_grade_id: SubGradeId,
    ) -> bool {
        let Some(grade) = find_grade_mut(&mut store.levels, grade_id) else {
            warn!("Grade not found");
            return false;
        };

        let before = grade.sub_grades.len();
        grade.sub_grades.retain(|s| s.id != sub_grade_id);
        if grade.sub_grades.len() == before {
            warn!("Sub-grade not found");
            return false;
        }

        track_hierarchy_mutation("sub_grade", "delete");
        true
    }

    pub fn find_sub_grade(store: &ClassesStore, sub_grade_id: SubGradeId) -> Option<&SubGrade> {
        store
            .grades()
            .flat_map(|g| g.sub_grades.iter())
            .find(|s| s.id == sub_grade_id)
    }
}
