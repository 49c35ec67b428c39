use classtree::{
    ClassesStore, CombinationService, GradeService, LevelService, SubGradeService,
};
use classtree_models::{CombinationId, GradeId, IdGenerator, LevelId, SubGradeId};

/// Ids of a grade created by [`add_grade`] together with its children.
#[allow(dead_code)]
pub struct TestGrade {
    pub level_id: LevelId,
    pub id: GradeId,
    pub sub_grades: Vec<SubGradeId>,
    pub combinations: Vec<CombinationId>,
}

/// Empty store with predictable ids.
pub fn test_store() -> ClassesStore {
    ClassesStore::new().with_id_generator(IdGenerator::sequential())
}

pub fn add_level(store: &mut ClassesStore, name: &str) -> LevelId {
    LevelService::add_level(store, name, None).id
}

/// Add a grade with the given sections and streams.
pub fn add_grade(
    store: &mut ClassesStore,
    level_id: LevelId,
    name: &str,
    sub_grades: &[&str],
    combinations: &[&str],
) -> TestGrade {
    let id = GradeService::add_grade(store, level_id, name, None)
        .expect("level exists")
        .id;
    let sub_grades = sub_grades
        .iter()
        .map(|s| {
            SubGradeService::add_sub_grade(store, id, s, None)
                .expect("grade exists")
                .id
        })
        .collect();
    let combinations = combinations
        .iter()
        .map(|c| {
            CombinationService::add_combination(store, id, c, None)
                .expect("grade exists")
                .id
        })
        .collect();

    TestGrade {
        level_id,
        id,
        sub_grades,
        combinations,
    }
}

/// Names of every derived class, in derivation order.
#[allow(dead_code)]
pub fn class_names(store: &ClassesStore) -> Vec<&str> {
    store
        .derived_classes()
        .iter()
        .map(|c| c.name.as_str())
        .collect()
}
