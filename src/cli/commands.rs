//! Command handlers. Output goes to a writer so commands can be captured.

use std::io::Write;

use anyhow::anyhow;
use classtree_core::AppError;
use classtree_models::{
    CascadeDeleteInfo, ClassFilterParams, CreateNodeDto, ExpansionKind, Grade, NamedNode,
    in_display_order,
};
use classtree_observability::{MetricsHandle, render_metrics};
use dialoguer::Confirm;
use tracing::info;

use super::NodeKind;
use super::paths::{ResolvedNode, TargetKind, resolve_grade, resolve_level, resolve_target};
use crate::modules::cascade::{CascadeService, StudentCounts};
use crate::modules::classes::ClassService;
use crate::modules::grades::GradeService;
use crate::modules::levels::LevelService;
use crate::modules::sub_grades::SubGradeService;
use crate::store::ClassesStore;
use crate::validator::{
    can_add_combinations, can_add_sub_grades, get_validation_message, validate_combination_name,
    validate_dto, validate_grade_name, validate_level_name, validate_sub_grade_name,
};

fn joined_names<T: NamedNode>(nodes: &[T]) -> String {
    in_display_order(nodes)
        .into_iter()
        .map(|node| node.name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn tree<W: Write>(store: &ClassesStore, out: &mut W) -> Result<(), AppError> {
    if store.is_empty() {
        writeln!(out, "(no levels)")?;
        return Ok(());
    }

    for level in in_display_order(store.levels()) {
        writeln!(out, "{}", level.name)?;
        for grade in in_display_order(&level.grades) {
            writeln!(out, "  {}", grade.name)?;
            if grade.has_sub_grades() {
                writeln!(out, "    sub-grades: {}", joined_names(&grade.sub_grades))?;
            }
            if grade.has_combinations() {
                writeln!(out, "    combinations: {}", joined_names(&grade.combinations))?;
            }
        }
    }
    Ok(())
}

pub fn classes<W: Write>(
    store: &ClassesStore,
    filters: &ClassFilterParams,
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let response = ClassService::list_classes(store, filters);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        return Ok(());
    }

    for class in &response.data {
        writeln!(out, "{:<12} {}", class.name, class.full_path)?;
    }
    let meta = &response.meta;
    writeln!(
        out,
        "-- {} of {} classes (offset {}{})",
        response.data.len(),
        meta.total,
        meta.offset.unwrap_or(0),
        if meta.has_more { ", more available" } else { "" }
    )?;
    Ok(())
}

pub fn stats<W: Write>(
    store: &ClassesStore,
    metrics: Option<&MetricsHandle>,
    out: &mut W,
) -> Result<(), AppError> {
    let stats = store.stats();
    writeln!(out, "levels:          {}", stats.levels)?;
    writeln!(out, "grades:          {}", stats.grades)?;
    writeln!(out, "sub-grades:      {}", stats.sub_grades)?;
    writeln!(out, "combinations:    {}", stats.combinations)?;
    writeln!(out, "derived classes: {}", stats.derived_classes)?;

    if let Some(handle) = metrics {
        writeln!(out)?;
        write!(out, "{}", render_metrics(handle))?;
    }
    Ok(())
}

fn write_impact<W: Write>(out: &mut W, info: &CascadeDeleteInfo) -> Result<(), AppError> {
    if !info.has_children {
        writeln!(out, "  nothing beneath it")?;
        return Ok(());
    }
    let counts = &info.counts;
    if let Some(grades) = counts.grades {
        writeln!(out, "  grades:     {}", grades)?;
    }
    if let Some(sub_grades) = counts.sub_grades {
        writeln!(out, "  sub-grades: {}", sub_grades)?;
    }
    if let Some(students) = counts.students {
        writeln!(out, "  students:   {}", students)?;
    }
    Ok(())
}

fn impact_of<S: StudentCounts + ?Sized>(
    store: &ClassesStore,
    node: ResolvedNode,
    students: &S,
) -> Result<CascadeDeleteInfo, AppError> {
    CascadeService::get_cascade_delete_info(store, node.cascade_target(), students)
        .ok_or_else(|| AppError::not_found(anyhow!("Node no longer exists")))
}

pub fn cascade<W, S>(
    store: &ClassesStore,
    students: &S,
    kind: TargetKind,
    path: &str,
    out: &mut W,
) -> Result<(), AppError>
where
    W: Write,
    S: StudentCounts + ?Sized,
{
    let node = resolve_target(store, kind, path)?;
    let info = impact_of(store, node, students)?;
    writeln!(out, "Deleting {} would remove:", path)?;
    write_impact(out, &info)
}

/// Delete a node after showing its cascade impact.
///
/// Prompts on the terminal unless `assume_yes` is set. Returns whether the
/// node was deleted.
pub fn delete<W, S>(
    store: &mut ClassesStore,
    students: &S,
    kind: TargetKind,
    path: &str,
    assume_yes: bool,
    out: &mut W,
) -> Result<bool, AppError>
where
    W: Write,
    S: StudentCounts + ?Sized,
{
    let node = resolve_target(store, kind, path)?;
    let info = impact_of(store, node, students)?;
    writeln!(out, "Deleting {} will remove:", path)?;
    write_impact(out, &info)?;

    let confirmed = assume_yes
        || Confirm::new()
            .with_prompt(format!("Delete {}?", path))
            .default(false)
            .interact()?;
    if !confirmed {
        writeln!(out, "Aborted.")?;
        return Ok(false);
    }

    let before = store.derived_classes().len();
    let deleted = match node {
        ResolvedNode::Level(level_id) => LevelService::delete_level(store, level_id),
        ResolvedNode::Grade { level_id, grade_id } => {
            GradeService::delete_grade(store, level_id, grade_id)
        }
        ResolvedNode::SubGrade {
            grade_id,
            sub_grade_id,
        } => SubGradeService::delete_sub_grade(store, grade_id, sub_grade_id),
    };
    if !deleted {
        return Err(AppError::not_found(anyhow!("{} not found", path)));
    }

    ClassService::regenerate_derived_classes(store);
    let after = store.derived_classes().len();
    info!(path, before, after, "Node deleted");
    writeln!(out, "Deleted {}. Derived classes: {} -> {}", path, before, after)?;
    Ok(true)
}

/// Print the advisory expansion message for `grade`, if any.
fn check_expansion<W: Write>(
    grade: &Grade,
    kind: ExpansionKind,
    out: &mut W,
) -> Result<(), AppError> {
    let allowed = match kind {
        ExpansionKind::SubGrades => can_add_sub_grades(grade),
        ExpansionKind::Combinations => can_add_combinations(grade),
    };
    if !allowed {
        if let Some(message) = get_validation_message(grade, kind) {
            writeln!(out, "note: {}", message)?;
        }
    }
    Ok(())
}

/// Check whether `name` could be used for a new node of `kind`.
///
/// Errors with `Validation` for malformed names and `Conflict` when a
/// sibling already uses the name.
pub fn check_name<W: Write>(
    store: &ClassesStore,
    kind: NodeKind,
    name: &str,
    parent: Option<&str>,
    out: &mut W,
) -> Result<(), AppError> {
    let name = name.trim();
    validate_dto(&CreateNodeDto::named(name))?;

    let require_parent = || {
        parent.ok_or_else(|| AppError::validation(anyhow!("--parent is required for a {:?}", kind)))
    };

    let (available, scope) = match kind {
        NodeKind::Level => (
            validate_level_name(store.levels(), name, None),
            "levels".to_string(),
        ),
        NodeKind::Grade => {
            let level = resolve_level(store, require_parent()?)?;
            (
                validate_grade_name(&level.grades, name, None),
                level.name.clone(),
            )
        }
        NodeKind::SubGrade => {
            let grade = resolve_grade(store, require_parent()?)?;
            check_expansion(grade, ExpansionKind::SubGrades, out)?;
            (
                validate_sub_grade_name(&grade.sub_grades, name, None),
                grade.name.clone(),
            )
        }
        NodeKind::Combination => {
            let grade = resolve_grade(store, require_parent()?)?;
            check_expansion(grade, ExpansionKind::Combinations, out)?;
            (
                validate_combination_name(&grade.combinations, name, None),
                grade.name.clone(),
            )
        }
    };

    if !available {
        return Err(AppError::conflict(anyhow!("'{}' is already used in {}", name, scope)));
    }
    writeln!(out, "'{}' is available in {}", name, scope)?;
    Ok(())
}

pub fn export<W: Write>(store: &ClassesStore, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{}", crate::export::to_json(store)?)?;
    Ok(())
}
