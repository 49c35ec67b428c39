//! Cascade-delete impact models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::ids::{GradeId, LevelId, SubGradeId};

/// A node whose deletion can be analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CascadeTarget {
    Level(LevelId),
    Grade(GradeId),
    SubGrade(SubGradeId),
}

impl CascadeTarget {
    pub fn node_id(&self) -> Uuid {
        match self {
            Self::Level(id) => id.into_inner(),
            Self::Grade(id) => id.into_inner(),
            Self::SubGrade(id) => id.into_inner(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Level(_) => "level",
            Self::Grade(_) => "grade",
            Self::SubGrade(_) => "sub_grade",
        }
    }
}

impl fmt::Display for CascadeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.node_id())
    }
}

/// Descendant counts; a field is `None` when it does not apply to the
/// target kind (a sub-grade has no grades beneath it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grades: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_grades: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<u64>,
}

impl CascadeCounts {
    pub fn any_positive(&self) -> bool {
        self.grades.unwrap_or(0) > 0
            || self.sub_grades.unwrap_or(0) > 0
            || self.students.unwrap_or(0) > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeDeleteInfo {
    pub has_children: bool,
    pub counts: CascadeCounts,
}

impl CascadeDeleteInfo {
    pub fn from_counts(counts: CascadeCounts) -> Self {
        Self {
            has_children: counts.any_positive(),
            counts,
        }
    }
}
