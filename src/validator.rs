//! Structural checks run before hierarchy mutations.
//!
//! Name checks compare trimmed names case-insensitively against the
//! siblings of the node being created or renamed. Passing `exclude` skips
//! the node itself so a rename to its own name stays valid.
//!
//! None of these checks is enforced by the services. A grade that ends up
//! with both sub-grades and combinations is still derived correctly.

use anyhow::anyhow;
use classtree_core::AppError;
use classtree_models::{
    Combination, CombinationId, ExpansionKind, Grade, GradeId, Level, LevelId, NamedNode,
    SubGrade, SubGradeId,
};
use validator::{Validate, ValidationErrors};

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// `true` when no sibling other than `exclude` already uses `candidate`.
pub fn is_name_available<T: NamedNode>(
    siblings: &[T],
    candidate: &str,
    exclude: Option<T::Id>,
) -> bool {
    let wanted = normalize(candidate);
    !siblings
        .iter()
        .filter(|node| Some(node.id()) != exclude)
        .any(|node| normalize(node.name()) == wanted)
}

pub fn validate_level_name(levels: &[Level], name: &str, exclude: Option<LevelId>) -> bool {
    is_name_available(levels, name, exclude)
}

pub fn validate_grade_name(grades: &[Grade], name: &str, exclude: Option<GradeId>) -> bool {
    is_name_available(grades, name, exclude)
}

pub fn validate_sub_grade_name(
    sub_grades: &[SubGrade],
    name: &str,
    exclude: Option<SubGradeId>,
) -> bool {
    is_name_available(sub_grades, name, exclude)
}

pub fn validate_combination_name(
    combinations: &[Combination],
    name: &str,
    exclude: Option<CombinationId>,
) -> bool {
    is_name_available(combinations, name, exclude)
}

/// A grade should expand through one mechanism only: no combinations once
/// it has sub-grades. Advisory; the services accept either way.
pub fn can_add_combinations(grade: &Grade) -> bool {
    !grade.has_sub_grades()
}

/// No sub-grades once the grade has combinations. Advisory.
pub fn can_add_sub_grades(grade: &Grade) -> bool {
    !grade.has_combinations()
}

/// Explanation for a failed `can_add_*` check, `None` when it passes.
pub fn get_validation_message(grade: &Grade, kind: ExpansionKind) -> Option<String> {
    match kind {
        ExpansionKind::Combinations if !can_add_combinations(grade) => Some(format!(
            "{} already has sub-grades; a grade should use either sub-grades or combinations, not both",
            grade.name
        )),
        ExpansionKind::SubGrades if !can_add_sub_grades(grade) => Some(format!(
            "{} already has combinations; a grade should use either combinations or sub-grades, not both",
            grade.name
        )),
        _ => None,
    }
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run the derive-based field rules of a DTO.
pub fn validate_dto<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::validation(anyhow!("{}", format_errors(&errors))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use classtree_models::{CreateNodeDto, IdGenerator};

    fn grade_with(sub_grades: &[&str], combinations: &[&str]) -> Grade {
        let mut ids = IdGenerator::sequential();
        let id: GradeId = ids.next_id();
        Grade {
            id,
            level_id: ids.next_id(),
            name: "S5".to_string(),
            order: 1,
            sub_grades: sub_grades
                .iter()
                .enumerate()
                .map(|(i, name)| SubGrade {
                    id: ids.next_id(),
                    grade_id: id,
                    name: name.to_string(),
                    order: i as i32 + 1,
                })
                .collect(),
            combinations: combinations
                .iter()
                .enumerate()
                .map(|(i, name)| Combination {
                    id: ids.next_id(),
                    grade_id: id,
                    name: name.to_string(),
                    order: i as i32 + 1,
                })
                .collect(),
        }
    }

    #[test]
    fn test_name_check_ignores_case_and_whitespace() {
        let grade = grade_with(&["A", "B"], &[]);
        assert!(!validate_sub_grade_name(&grade.sub_grades, "a", None));
        assert!(!validate_sub_grade_name(&grade.sub_grades, "  B ", None));
        assert!(validate_sub_grade_name(&grade.sub_grades, "C", None));
    }

    #[test]
    fn test_name_check_excludes_self() {
        let grade = grade_with(&["A", "B"], &[]);
        let a = grade.sub_grades[0].id;
        assert!(validate_sub_grade_name(&grade.sub_grades, "A", Some(a)));
        assert!(!validate_sub_grade_name(&grade.sub_grades, "B", Some(a)));
    }

    #[test]
    fn test_expansion_checks() {
        let plain = grade_with(&[], &[]);
        assert!(can_add_combinations(&plain));
        assert!(can_add_sub_grades(&plain));

        let sectioned = grade_with(&["A"], &[]);
        assert!(!can_add_combinations(&sectioned));
        assert!(can_add_sub_grades(&sectioned));

        let streamed = grade_with(&[], &["MCB"]);
        assert!(can_add_combinations(&streamed));
        assert!(!can_add_sub_grades(&streamed));

        let both = grade_with(&["A"], &["MCB"]);
        assert!(!can_add_combinations(&both));
        assert!(!can_add_sub_grades(&both));
    }

    #[test]
    fn test_validation_messages() {
        let plain = grade_with(&[], &[]);
        assert_eq!(get_validation_message(&plain, ExpansionKind::SubGrades), None);
        assert_eq!(get_validation_message(&plain, ExpansionKind::Combinations), None);

        let sectioned = grade_with(&["A"], &[]);
        let msg = get_validation_message(&sectioned, ExpansionKind::Combinations);
        assert!(msg.is_some_and(|m| m.contains("sub-grades")));
        assert_eq!(get_validation_message(&sectioned, ExpansionKind::SubGrades), None);

        let streamed = grade_with(&[], &["MCB"]);
        let msg = get_validation_message(&streamed, ExpansionKind::SubGrades);
        assert!(msg.is_some_and(|m| m.contains("combinations")));
    }

    #[test]
    fn test_validate_dto_reports_message() {
        let err = validate_dto(&CreateNodeDto::named("")).unwrap_err();
        assert_eq!(err.kind, classtree_core::ErrorKind::Validation);
        assert!(!err.to_string().is_empty());

        assert!(validate_dto(&CreateNodeDto::named("S1")).is_ok());
    }
}
