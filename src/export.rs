//! JSON snapshot of a store for dashboards and fixtures.

use chrono::{DateTime, Utc};
use classtree_core::AppError;
use classtree_models::{DerivedClass, HierarchyStats, Level};
use serde::Serialize;

use crate::modules::classes::ClassService;
use crate::store::ClassesStore;

#[derive(Debug, Serialize)]
pub struct StoreSnapshot<'a> {
    pub generated_at: DateTime<Utc>,
    pub stats: HierarchyStats,
    pub fingerprint: String,
    pub levels: &'a [Level],
    pub derived_classes: &'a [DerivedClass],
}

pub fn snapshot(store: &ClassesStore) -> StoreSnapshot<'_> {
    StoreSnapshot {
        generated_at: Utc::now(),
        stats: store.stats(),
        fingerprint: ClassService::fingerprint(store),
        levels: store.levels(),
        derived_classes: store.derived_classes(),
    }
}

pub fn to_json(store: &ClassesStore) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(&snapshot(store))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::grades::GradeService;
    use crate::modules::levels::LevelService;
    use classtree_models::IdGenerator;

    #[test]
    fn test_snapshot_json_shape() {
        let mut store = ClassesStore::new().with_id_generator(IdGenerator::sequential());
        let level_id = LevelService::add_level(&mut store, "O-Level", None).id;
        GradeService::add_grade(&mut store, level_id, "S1", None);
        ClassService::regenerate_derived_classes(&mut store);

        let value: serde_json::Value = serde_json::from_str(&to_json(&store).unwrap()).unwrap();
        assert_eq!(value["stats"]["derived_classes"], 1);
        assert_eq!(value["derived_classes"][0]["name"], "S1");
        assert_eq!(value["levels"][0]["grades"][0]["name"], "S1");
        assert_eq!(value["fingerprint"].as_str().map(str::len), Some(64));
        assert!(value["generated_at"].is_string());
    }
}
