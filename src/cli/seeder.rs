//! Applies generated seeds to a store through the hierarchy services.

use std::time::Instant;

use classtree_cli::seeder::{LevelSeed, generate_class_sizes, generate_hierarchy};
use classtree_config::{SeedConfig, StoreConfig};
use tracing::{info, instrument};

use crate::modules::cascade::Roster;
use crate::modules::classes::ClassService;
use crate::modules::combinations::CombinationService;
use crate::modules::grades::GradeService;
use crate::modules::levels::LevelService;
use crate::modules::sub_grades::SubGradeService;
use crate::store::ClassesStore;

/// Append `seeds` to the store and regenerate its derived classes once.
#[instrument(skip_all, fields(levels = seeds.len()))]
pub fn seed_store(store: &mut ClassesStore, seeds: &[LevelSeed]) {
    let start_time = Instant::now();

    for level_seed in seeds {
        let level_id = LevelService::add_level(store, &level_seed.name, None).id;
        for grade_seed in &level_seed.grades {
            let Some(grade_id) =
                GradeService::add_grade(store, level_id, &grade_seed.name, None).map(|g| g.id)
            else {
                continue;
            };
            for name in &grade_seed.sub_grades {
                SubGradeService::add_sub_grade(store, grade_id, name, None);
            }
            for name in &grade_seed.combinations {
                CombinationService::add_combination(store, grade_id, name, None);
            }
        }
    }
    ClassService::regenerate_derived_classes(store);

    info!(
        classes = store.derived_classes().len(),
        elapsed = ?start_time.elapsed(),
        "Store seeded"
    );
}

/// A store populated with the stock school layout.
pub fn demo_store(config: &StoreConfig) -> ClassesStore {
    let mut store = ClassesStore::from_config(config);
    seed_store(&mut store, &generate_hierarchy());
    store
}

/// Mock enrolment for every enrollable class of `store`.
pub fn seed_roster(store: &ClassesStore, config: &SeedConfig) -> Roster {
    let classes = Roster::enrollable_classes(store);
    let sizes = generate_class_sizes(&classes, config);
    Roster::from_class_sizes(store, sizes)
}
