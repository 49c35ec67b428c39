use classtree_config::{IdStrategy, StoreConfig};
use classtree_models::{
    DerivedClass, Grade, GradeId, HierarchyStats, IdGenerator, Level, LevelId,
};
use serde::Serialize;

/// Root aggregate: the level tree plus the classes derived from it.
///
/// One value per session or test; every service takes it by reference.
/// Hierarchy nodes are only reachable through their parent's collection,
/// and `derived_classes` is only ever replaced wholesale by
/// [`ClassService::regenerate_derived_classes`](crate::modules::classes::ClassService::regenerate_derived_classes).
#[derive(Debug, Clone, Serialize)]
pub struct ClassesStore {
    pub(crate) levels: Vec<Level>,
    pub(crate) derived_classes: Vec<DerivedClass>,
    #[serde(skip)]
    pub(crate) ids: IdGenerator,
    #[serde(skip)]
    pub(crate) path_separator: String,
}

impl Default for ClassesStore {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl ClassesStore {
    /// An empty store with random ids and the default `" / "` path separator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        let ids = match config.id_strategy {
            IdStrategy::Random => IdGenerator::random(),
            IdStrategy::Sequential => IdGenerator::sequential(),
        };
        Self {
            levels: Vec::new(),
            derived_classes: Vec::new(),
            ids,
            path_separator: config.path_separator.clone(),
        }
    }

    /// Replace the id generator, e.g. with [`IdGenerator::sequential`] for fixtures.
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn derived_classes(&self) -> &[DerivedClass] {
        &self.derived_classes
    }

    pub fn path_separator(&self) -> &str {
        &self.path_separator
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Every grade in the store, in level then grade order.
    pub fn grades(&self) -> impl Iterator<Item = &Grade> {
        self.levels.iter().flat_map(|level| level.grades.iter())
    }

    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            levels: self.levels.len(),
            grades: self.grades().count(),
            sub_grades: self.grades().map(|g| g.sub_grades.len()).sum(),
            combinations: self.grades().map(|g| g.combinations.len()).sum(),
            derived_classes: self.derived_classes.len(),
        }
    }
}

pub(crate) fn find_level_mut(levels: &mut [Level], id: LevelId) -> Option<&mut Level> {
    levels.iter_mut().find(|level| level.id == id)
}

pub(crate) fn find_grade_mut(levels: &mut [Level], id: GradeId) -> Option<&mut Grade> {
    levels
        .iter_mut()
        .flat_map(|level| level.grades.iter_mut())
        .find(|grade| grade.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = ClassesStore::new();
        assert!(store.is_empty());
        assert_eq!(store.stats(), HierarchyStats::default());
        assert_eq!(store.path_separator(), " / ");
    }

    #[test]
    fn test_from_config_uses_strategy_and_separator() {
        let config = StoreConfig {
            path_separator: " > ".to_string(),
            id_strategy: IdStrategy::Sequential,
        };
        let store = ClassesStore::from_config(&config);
        assert_eq!(store.path_separator(), " > ");
        assert_eq!(store.ids, IdGenerator::sequential());
    }

    #[test]
    fn test_serializes_only_data() {
        let json = serde_json::to_value(ClassesStore::new()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("levels"));
        assert!(object.contains_key("derived_classes"));
    }
}
