mod common;

use classtree::{ClassService, CombinationService, GradeService, LevelService, SubGradeService};
use classtree_models::{GradeId, LevelId, NodePatch};
use common::{add_grade, add_level, test_store};

#[test]
fn test_add_level_assigns_next_order() {
    let mut store = test_store();
    let first = LevelService::add_level(&mut store, "Nursery", None).order;
    let second = LevelService::add_level(&mut store, "Primary", None).order;
    let explicit = LevelService::add_level(&mut store, "O-Level", Some(10)).order;
    let after = LevelService::add_level(&mut store, "A-Level", None).order;

    assert_eq!((first, second, explicit, after), (1, 2, 10, 11));
    assert_eq!(store.stats().levels, 4);
}

#[test]
fn test_add_grade_to_missing_level_is_none() {
    let mut store = test_store();
    add_level(&mut store, "Primary");

    assert!(GradeService::add_grade(&mut store, LevelId::new(), "P1", None).is_none());
    assert_eq!(store.stats().grades, 0);
}

#[test]
fn test_children_record_their_parent() {
    let mut store = test_store();
    let level_id = add_level(&mut store, "A-Level");
    let grade = add_grade(&mut store, level_id, "S5", &["A"], &["MCB"]);

    let stored = GradeService::find_grade(&store, grade.id).unwrap();
    assert_eq!(stored.level_id, level_id);
    assert_eq!(stored.sub_grades[0].grade_id, grade.id);
    assert_eq!(stored.combinations[0].grade_id, grade.id);
}

#[test]
fn test_update_merges_patch() {
    let mut store = test_store();
    let level_id = add_level(&mut store, "Primary");
    let grade = add_grade(&mut store, level_id, "P1", &["A"], &[]);

    let level = LevelService::update_level(&mut store, level_id, &NodePatch::rename("Lower Primary"))
        .unwrap();
    assert_eq!(level.name, "Lower Primary");
    assert_eq!(level.order, 1);

    let grade_after = GradeService::update_grade(&mut store, level_id, grade.id, &NodePatch::reorder(7))
        .unwrap();
    assert_eq!(grade_after.name, "P1");
    assert_eq!(grade_after.order, 7);

    let sub = SubGradeService::update_sub_grade(
        &mut store,
        grade.id,
        grade.sub_grades[0],
        &NodePatch::rename("North"),
    )
    .unwrap();
    assert_eq!(sub.name, "North");
}

#[test]
fn test_update_unknown_node_is_none() {
    let mut store = test_store();
    assert!(LevelService::update_level(&mut store, LevelId::new(), &NodePatch::rename("X")).is_none());
}

#[test]
fn test_grade_update_requires_matching_level() {
    let mut store = test_store();
    let primary = add_level(&mut store, "Primary");
    let secondary = add_level(&mut store, "O-Level");
    let grade = add_grade(&mut store, primary, "P1", &[], &[]);

    assert!(GradeService::update_grade(&mut store, secondary, grade.id, &NodePatch::rename("X")).is_none());
    assert!(!GradeService::delete_grade(&mut store, secondary, grade.id));
    assert!(GradeService::find_grade(&store, grade.id).is_some());
}

#[test]
fn test_delete_level_cascades_and_regeneration_drops_classes() {
    let mut store = test_store();
    let primary = add_level(&mut store, "Primary");
    let grade = add_grade(&mut store, primary, "P1", &["A", "B"], &[]);
    let other = add_level(&mut store, "O-Level");
    add_grade(&mut store, other, "S1", &[], &[]);
    ClassService::regenerate_derived_classes(&mut store);
    assert_eq!(store.derived_classes().len(), 3);

    assert!(LevelService::delete_level(&mut store, primary));
    assert!(LevelService::find_level(&store, primary).is_none());
    assert!(GradeService::find_grade(&store, grade.id).is_none());
    assert!(SubGradeService::find_sub_grade(&store, grade.sub_grades[0]).is_none());

    // Classes are only rebuilt on request.
    assert_eq!(store.derived_classes().len(), 3);
    ClassService::regenerate_derived_classes(&mut store);
    assert!(store.derived_classes().iter().all(|c| c.level_id != primary));
    assert_eq!(store.derived_classes().len(), 1);
}

#[test]
fn test_delete_missing_nodes_returns_false() {
    let mut store = test_store();
    let level_id = add_level(&mut store, "A-Level");
    let grade = add_grade(&mut store, level_id, "S5", &["A"], &["MCB"]);

    assert!(!LevelService::delete_level(&mut store, LevelId::new()));
    assert!(CombinationService::delete_combination(&mut store, grade.id, grade.combinations[0]));
    assert!(!CombinationService::delete_combination(&mut store, grade.id, grade.combinations[0]));
    assert!(SubGradeService::delete_sub_grade(&mut store, grade.id, grade.sub_grades[0]));
    assert!(!SubGradeService::delete_sub_grade(&mut store, grade.id, grade.sub_grades[0]));
}

#[test]
fn test_find_by_name_is_case_insensitive() {
    let mut store = test_store();
    let level_id = add_level(&mut store, "Primary");
    let grade = add_grade(&mut store, level_id, "P1", &[], &[]);

    assert_eq!(
        LevelService::find_level_by_name(&store, " primary ").map(|l| l.id),
        Some(level_id)
    );
    assert_eq!(
        GradeService::find_grade_by_name(&store, level_id, "p1").map(|g| g.id),
        Some(grade.id)
    );
}

#[test]
fn test_combination_update_and_find() {
    let mut store = test_store();
    let level_id = add_level(&mut store, "A-Level");
    let grade = add_grade(&mut store, level_id, "S5", &[], &["MCB"]);
    let mcb = grade.combinations[0];
    ClassService::regenerate_derived_classes(&mut store);
    let id = store.derived_classes()[0].id;

    let renamed =
        CombinationService::update_combination(&mut store, grade.id, mcb, &NodePatch::rename("MCE"))
            .map(|c| c.name.clone());
    assert_eq!(renamed.as_deref(), Some("MCE"));
    assert!(
        CombinationService::update_combination(&mut store, GradeId::new(), mcb, &NodePatch::reorder(2))
            .is_none()
    );

    ClassService::regenerate_derived_classes(&mut store);
    assert_eq!(store.derived_classes()[0].id, id);
    assert_eq!(store.derived_classes()[0].name, "S5 MCE");

    assert_eq!(
        CombinationService::find_combination(&store, mcb).map(|c| c.grade_id),
        Some(grade.id)
    );
    assert!(CombinationService::delete_combination(&mut store, grade.id, mcb));
    assert!(CombinationService::find_combination(&store, mcb).is_none());
}
