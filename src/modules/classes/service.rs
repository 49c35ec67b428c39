use classtree_core::paginate;
use classtree_models::{
    ClassFilterParams, CombinationId, DerivedClass, DerivedClassId, Grade, GradeId, Level,
    LevelId, PaginatedClassesResponse, SubGradeId,
};
use classtree_observability::track_regeneration;
use sha2::{Digest, Sha256};
use tracing::{info, instrument};

use super::naming::{class_name, full_path};
use crate::store::ClassesStore;

pub struct ClassService;

impl ClassService {
    /// Rebuild `derived_classes` from the current hierarchy.
    ///
    /// The previous list is discarded, never patched. Running this twice
    /// without a structural change in between produces identical output.
    #[instrument(skip(store))]
    pub fn regenerate_derived_classes(store: &mut ClassesStore) {
        let classes = derive_classes(&store.levels, &store.path_separator);
        info!(classes = classes.len(), "Derived classes regenerated");
        track_regeneration(classes.len());
        store.derived_classes = classes;
    }

    pub fn find_class(store: &ClassesStore, class_id: DerivedClassId) -> Option<&DerivedClass> {
        store.derived_classes.iter().find(|c| c.id == class_id)
    }

    pub fn classes_for_level(store: &ClassesStore, level_id: LevelId) -> Vec<&DerivedClass> {
        store
            .derived_classes
            .iter()
            .filter(|c| c.level_id == level_id)
            .collect()
    }

    pub fn classes_for_grade(store: &ClassesStore, grade_id: GradeId) -> Vec<&DerivedClass> {
        store
            .derived_classes
            .iter()
            .filter(|c| c.grade_id == grade_id)
            .collect()
    }

    /// Filtered, paginated view of the derived classes in derivation order.
    pub fn list_classes(store: &ClassesStore, filters: &ClassFilterParams) -> PaginatedClassesResponse {
        let matching = store
            .derived_classes
            .iter()
            .filter(|c| filters.matches(c))
            .cloned();
        let (data, meta) = paginate(matching, &filters.pagination);
        PaginatedClassesResponse { data, meta }
    }

    /// SHA-256 over every class id, name and path, hex encoded.
    ///
    /// Two stores with the same fingerprint expose byte-identical class lists.
    pub fn fingerprint(store: &ClassesStore) -> String {
        let mut hasher = Sha256::new();
        for class in &store.derived_classes {
            hasher.update(class.id.as_uuid().as_bytes());
            hasher.update(class.name.as_bytes());
            hasher.update([0u8]);
            hasher.update(class.full_path.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

/// Derive the full class list for `levels`, in level then grade order.
pub fn derive_classes(levels: &[Level], separator: &str) -> Vec<DerivedClass> {
    let mut classes = Vec::new();
    for level in levels {
        for grade in &level.grades {
            derive_grade_classes(level, grade, separator, &mut classes);
        }
    }
    classes
}

/// Expand one grade:
///
/// 1. combinations and sub-grades: each combination alone, then paired with
///    every sub-grade
/// 2. combinations only: one class per combination
/// 3. sub-grades only: one class per sub-grade
/// 4. neither: the bare grade
fn derive_grade_classes(level: &Level, grade: &Grade, separator: &str, out: &mut Vec<DerivedClass>) {
    let make = |combination: Option<(&str, CombinationId)>, sub_grade: Option<(&str, SubGradeId)>| {
        let combination_name = combination.map(|(name, _)| name);
        let sub_grade_name = sub_grade.map(|(name, _)| name);
        let combination_id = combination.map(|(_, id)| id);
        let sub_grade_id = sub_grade.map(|(_, id)| id);
        DerivedClass {
            id: DerivedClassId::derive(grade.id, sub_grade_id, combination_id),
            name: class_name(&grade.name, combination_name, sub_grade_name),
            full_path: full_path(
                separator,
                &level.name,
                &grade.name,
                combination_name,
                sub_grade_name,
            ),
            level_id: level.id,
            grade_id: grade.id,
            sub_grade_id,
            combination_id,
        }
    };

    match (grade.has_combinations(), grade.has_sub_grades()) {
        (true, true) => {
            for combination in &grade.combinations {
                let comb = Some((combination.name.as_str(), combination.id));
                out.push(make(comb, None));
                for sub_grade in &grade.sub_grades {
                    out.push(make(comb, Some((sub_grade.name.as_str(), sub_grade.id))));
                }
            }
        }
        (true, false) => {
            for combination in &grade.combinations {
                out.push(make(Some((combination.name.as_str(), combination.id)), None));
            }
        }
        (false, true) => {
            for sub_grade in &grade.sub_grades {
                out.push(make(None, Some((sub_grade.name.as_str(), sub_grade.id))));
            }
        }
        (false, false) => out.push(make(None, None)),
    }
}
