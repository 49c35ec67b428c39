//! Mock enrolment sizes for derived classes.
//!
//! Sizes are drawn per class from an RNG seeded with the configured seed and
//! the class id, so the same store always receives the same roster no matter
//! how the work is split across threads.

use classtree_config::SeedConfig;
use classtree_models::{DerivedClass, DerivedClassId};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

fn rng_for(class_id: DerivedClassId, seed: u64) -> StdRng {
    let raw = class_id.into_inner().as_u128();
    let mixed = seed ^ (raw as u64) ^ ((raw >> 64) as u64);
    StdRng::seed_from_u64(mixed)
}

/// Draws a class size in `[students_min, students_max]` for every class.
pub fn generate_class_sizes(
    classes: &[&DerivedClass],
    config: &SeedConfig,
) -> Vec<(DerivedClassId, u64)> {
    let start_time = Instant::now();

    let sizes: Vec<(DerivedClassId, u64)> = classes
        .par_iter()
        .map(|class| {
            let mut rng = rng_for(class.id, config.rng_seed);
            let size = rng.gen_range(config.students_min..=config.students_max);
            (class.id, size)
        })
        .collect();

    debug!(
        classes = sizes.len(),
        elapsed = ?start_time.elapsed(),
        "Generated class sizes"
    );

    sizes
}
