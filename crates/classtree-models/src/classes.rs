//! Derived class models and listing DTOs.

use classtree_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};

use crate::ids::{CombinationId, DerivedClassId, GradeId, LevelId, SubGradeId};

/// A concrete class computed from a grade and its children, e.g. "S5 MCB A".
///
/// Never edited directly: the whole list is regenerated from the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedClass {
    pub id: DerivedClassId,
    pub name: String,
    pub full_path: String,
    pub level_id: LevelId,
    pub grade_id: GradeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_grade_id: Option<SubGradeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination_id: Option<CombinationId>,
}

impl DerivedClass {
    /// Combination-level class without a section suffix, e.g. "S5 MCB".
    pub fn is_combination_only(&self) -> bool {
        self.combination_id.is_some() && self.sub_grade_id.is_none()
    }
}

/// Filters for listing derived classes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassFilterParams {
    pub level_id: Option<LevelId>,
    pub grade_id: Option<GradeId>,
    /// Case-insensitive substring match on the class name.
    pub name: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ClassFilterParams {
    pub fn matches(&self, class: &DerivedClass) -> bool {
        if self.level_id.is_some_and(|id| id != class.level_id) {
            return false;
        }
        if self.grade_id.is_some_and(|id| id != class.grade_id) {
            return false;
        }
        match &self.name {
            Some(needle) => class
                .name
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedClassesResponse {
    pub data: Vec<DerivedClass>,
    pub meta: PaginationMeta,
}
