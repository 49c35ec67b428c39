use classtree_models::{CascadeCounts, CascadeDeleteInfo, CascadeTarget};
use classtree_observability::track_cascade_analysis;
use tracing::{debug, instrument};

use super::roster::StudentCounts;
use crate::modules::grades::GradeService;
use crate::modules::levels::LevelService;
use crate::modules::sub_grades::SubGradeService;
use crate::store::ClassesStore;

pub struct CascadeService;

impl CascadeService {
    /// What would disappear if `target` were deleted.
    ///
    /// Returns `None` when the target id does not resolve. Never mutates the
    /// store; deletion itself goes through the hierarchy services.
    #[instrument(skip(store, students), fields(kind = target.kind()))]
    pub fn get_cascade_delete_info<S>(
        store: &ClassesStore,
        target: CascadeTarget,
        students: &S,
    ) -> Option<CascadeDeleteInfo>
    where
        S: StudentCounts + ?Sized,
    {
        let counts = match target {
            CascadeTarget::Level(id) => {
                let level = LevelService::find_level(store, id)?;
                CascadeCounts {
                    grades: Some(level.grades.len()),
                    sub_grades: Some(level.sub_grade_count()),
                    students: Some(students.student_count_for(id.into_inner())),
                }
            }
            CascadeTarget::Grade(id) => {
                let grade = GradeService::find_grade(store, id)?;
                CascadeCounts {
                    grades: None,
                    sub_grades: Some(grade.sub_grades.len()),
                    students: Some(students.student_count_for(id.into_inner())),
                }
            }
            CascadeTarget::SubGrade(id) => {
                SubGradeService::find_sub_grade(store, id)?;
                CascadeCounts {
                    grades: None,
                    sub_grades: None,
                    students: Some(students.student_count_for(id.into_inner())),
                }
            }
        };

        debug!(?counts, "Cascade impact computed");
        track_cascade_analysis(target.kind());
        Some(CascadeDeleteInfo::from_counts(counts))
    }
}
