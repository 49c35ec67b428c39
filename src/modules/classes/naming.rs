//! Class naming rules.
//!
//! | Children                      | Name          |
//! |-------------------------------|---------------|
//! | none                          | `S1`          |
//! | sub-grade                     | `S1 A`        |
//! | combination                   | `S5 MCB`      |
//! | combination + sub-grade       | `S5 MCB A`    |
//!
//! The breadcrumb path prefixes the level name and joins the same tokens
//! with the store's separator: `A-Level / S5 / MCB / A`.

/// Display name of a derived class: grade, then combination, then sub-grade.
pub fn class_name(grade: &str, combination: Option<&str>, sub_grade: Option<&str>) -> String {
    let mut name = grade.to_string();
    for token in [combination, sub_grade].into_iter().flatten() {
        name.push(' ');
        name.push_str(token);
    }
    name
}

/// Breadcrumb path of a derived class, starting at the level.
pub fn full_path(
    separator: &str,
    level: &str,
    grade: &str,
    combination: Option<&str>,
    sub_grade: Option<&str>,
) -> String {
    [Some(level), Some(grade), combination, sub_grade]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(separator)
}
