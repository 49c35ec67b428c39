//! Hierarchy entities: levels, grades, sub-grades and combinations.
//!
//! A [`Level`] owns its [`Grade`]s, and a grade owns its [`SubGrade`]s and
//! [`Combination`]s. Children are only reachable through their parent's
//! collection, so dropping a parent drops everything beneath it.

use serde::{Deserialize, Serialize};

use crate::ids::{CombinationId, GradeId, LevelId, SubGradeId};

/// An education stage, e.g. "Primary" or "A-Level".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
    pub order: i32,
    pub grades: Vec<Grade>,
}

/// A year within a level, e.g. "S5".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub level_id: LevelId,
    pub name: String,
    pub order: i32,
    pub sub_grades: Vec<SubGrade>,
    pub combinations: Vec<Combination>,
}

/// A lettered section within a grade, e.g. "A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubGrade {
    pub id: SubGradeId,
    pub grade_id: GradeId,
    pub name: String,
    pub order: i32,
}

/// A subject-stream track within a grade, e.g. "MCB".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub id: CombinationId,
    pub grade_id: GradeId,
    pub name: String,
    pub order: i32,
}

impl Level {
    /// Number of sub-grades across all grades of this level.
    pub fn sub_grade_count(&self) -> usize {
        self.grades.iter().map(|g| g.sub_grades.len()).sum()
    }
}

impl Grade {
    pub fn has_sub_grades(&self) -> bool {
        !self.sub_grades.is_empty()
    }

    pub fn has_combinations(&self) -> bool {
        !self.combinations.is_empty()
    }
}

/// The two mechanisms that expand a grade into several classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionKind {
    SubGrades,
    Combinations,
}

/// Common view over sibling entities, used by name checks and ordering.
pub trait NamedNode {
    type Id: Copy + PartialEq;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
    fn order(&self) -> i32;
}

macro_rules! impl_named_node {
    ($ty:ty, $id:ty) => {
        impl NamedNode for $ty {
            type Id = $id;

            fn id(&self) -> Self::Id {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn order(&self) -> i32 {
                self.order
            }
        }
    };
}

impl_named_node!(Level, LevelId);
impl_named_node!(Grade, GradeId);
impl_named_node!(SubGrade, SubGradeId);
impl_named_node!(Combination, CombinationId);

/// Order value for a node appended after `siblings`: one past the current
/// maximum, or `1` for the first sibling.
pub fn next_order<T: NamedNode>(siblings: &[T]) -> i32 {
    siblings
        .iter()
        .map(NamedNode::order)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Siblings sorted by their display order, ties kept in insertion order.
pub fn in_display_order<T: NamedNode>(siblings: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = siblings.iter().collect();
    sorted.sort_by_key(|node| node.order());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub_grade(name: &str, order: i32) -> SubGrade {
        SubGrade {
            id: SubGradeId::new(),
            grade_id: GradeId::from_u128(1),
            name: name.to_string(),
            order,
        }
    }

    #[test]
    fn test_next_order_empty_starts_at_one() {
        let none: Vec<SubGrade> = Vec::new();
        assert_eq!(next_order(&none), 1);
    }

    #[test]
    fn test_next_order_uses_max_not_len() {
        let siblings = vec![sub_grade("A", 4), sub_grade("B", 2)];
        assert_eq!(next_order(&siblings), 5);
    }

    #[test]
    fn test_display_order_is_stable() {
        let siblings = vec![sub_grade("C", 3), sub_grade("A", 1), sub_grade("B", 1)];
        let names: Vec<&str> = in_display_order(&siblings)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_expansion_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ExpansionKind::SubGrades).unwrap();
        assert_eq!(json, r#""sub_grades""#);
    }
}
