//! Slash-separated node paths such as `A-Level/S5` or `Primary/P1/A`.
//!
//! Segments are matched case-insensitively against sibling names.

use anyhow::anyhow;
use clap::ValueEnum;
use classtree_core::AppError;
use classtree_models::{CascadeTarget, Grade, GradeId, Level, LevelId, SubGradeId};

use crate::modules::grades::GradeService;
use crate::modules::levels::LevelService;
use crate::store::ClassesStore;

/// Nodes that can be analyzed for cascade impact and deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetKind {
    Level,
    Grade,
    SubGrade,
}

impl TargetKind {
    fn depth(self) -> usize {
        match self {
            Self::Level => 1,
            Self::Grade => 2,
            Self::SubGrade => 3,
        }
    }
}

/// A node located by path, with the parent ids its service calls need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedNode {
    Level(LevelId),
    Grade {
        level_id: LevelId,
        grade_id: GradeId,
    },
    SubGrade {
        grade_id: GradeId,
        sub_grade_id: SubGradeId,
    },
}

impl ResolvedNode {
    pub fn cascade_target(self) -> CascadeTarget {
        match self {
            Self::Level(id) => CascadeTarget::Level(id),
            Self::Grade { grade_id, .. } => CascadeTarget::Grade(grade_id),
            Self::SubGrade { sub_grade_id, .. } => CascadeTarget::SubGrade(sub_grade_id),
        }
    }
}

pub fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

pub fn resolve_level<'s>(store: &'s ClassesStore, path: &str) -> Result<&'s Level, AppError> {
    match segments(path).as_slice() {
        [level] => LevelService::find_level_by_name(store, level)
            .ok_or_else(|| AppError::not_found(anyhow!("Level '{}' not found", level))),
        _ => Err(AppError::validation(anyhow!(
            "Expected a level name, got '{}'",
            path
        ))),
    }
}

pub fn resolve_grade<'s>(store: &'s ClassesStore, path: &str) -> Result<&'s Grade, AppError> {
    match segments(path).as_slice() {
        [level, grade] => {
            let level = resolve_level(store, level)?;
            GradeService::find_grade_by_name(store, level.id, grade).ok_or_else(|| {
                AppError::not_found(anyhow!("Grade '{}' not found in {}", grade, level.name))
            })
        }
        _ => Err(AppError::validation(anyhow!(
            "Expected LEVEL/GRADE, got '{}'",
            path
        ))),
    }
}

/// Resolve `path` to a node of `kind`.
pub fn resolve_target(
    store: &ClassesStore,
    kind: TargetKind,
    path: &str,
) -> Result<ResolvedNode, AppError> {
    let parts = segments(path);
    if parts.len() != kind.depth() {
        return Err(AppError::validation(anyhow!(
            "A {:?} path has {} segment(s), got '{}'",
            kind,
            kind.depth(),
            path
        )));
    }

    match kind {
        TargetKind::Level => Ok(ResolvedNode::Level(resolve_level(store, path)?.id)),
        TargetKind::Grade => {
            let grade = resolve_grade(store, path)?;
            Ok(ResolvedNode::Grade {
                level_id: grade.level_id,
                grade_id: grade.id,
            })
        }
        TargetKind::SubGrade => {
            let grade = resolve_grade(store, &parts[..2].join("/"))?;
            let name = parts[2];
            grade
                .sub_grades
                .iter()
                .find(|s| same_name(&s.name, name))
                .map(|s| ResolvedNode::SubGrade {
                    grade_id: grade.id,
                    sub_grade_id: s.id,
                })
                .ok_or_else(|| {
                    AppError::not_found(anyhow!("Sub-grade '{}' not found in {}", name, grade.name))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::sub_grades::SubGradeService;
    use classtree_core::ErrorKind;
    use classtree_models::IdGenerator;

    fn store() -> ClassesStore {
        let mut store = ClassesStore::new().with_id_generator(IdGenerator::sequential());
        let level_id = LevelService::add_level(&mut store, "A-Level", None).id;
        let grade_id = GradeService::add_grade(&mut store, level_id, "S5", None)
            .unwrap()
            .id;
        SubGradeService::add_sub_grade(&mut store, grade_id, "A", None);
        store
    }

    #[test]
    fn test_segments_trim_and_skip_empty() {
        assert_eq!(segments(" A-Level / S5/ "), vec!["A-Level", "S5"]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_resolves_each_kind() {
        let store = store();
        let level = &store.levels()[0];
        let grade = &level.grades[0];

        assert_eq!(
            resolve_target(&store, TargetKind::Level, "a-level").unwrap(),
            ResolvedNode::Level(level.id)
        );
        assert_eq!(
            resolve_target(&store, TargetKind::Grade, "A-Level/s5").unwrap(),
            ResolvedNode::Grade {
                level_id: level.id,
                grade_id: grade.id
            }
        );
        assert_eq!(
            resolve_target(&store, TargetKind::SubGrade, "A-Level/S5/a").unwrap(),
            ResolvedNode::SubGrade {
                grade_id: grade.id,
                sub_grade_id: grade.sub_grades[0].id
            }
        );
    }

    #[test]
    fn test_resolve_errors() {
        let store = store();
        let err = resolve_target(&store, TargetKind::Grade, "A-Level").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = resolve_target(&store, TargetKind::Grade, "A-Level/S9").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = resolve_target(&store, TargetKind::Level, "Nursery").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
