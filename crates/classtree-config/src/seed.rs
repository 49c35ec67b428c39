use crate::parse_or;

/// Mock roster generation settings.
///
/// # Environment Variables
///
/// - `SEED_STUDENTS_MIN`: smallest class size (default: `20`)
/// - `SEED_STUDENTS_MAX`: largest class size (default: `45`)
/// - `SEED_RNG_SEED`: seed for the roster generator (default: `42`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub students_min: u64,
    pub students_max: u64,
    pub rng_seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            students_min: 20,
            students_max: 45,
            rng_seed: 42,
        }
    }
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            students_min: parse_or(&lookup, "SEED_STUDENTS_MIN", defaults.students_min),
            students_max: parse_or(&lookup, "SEED_STUDENTS_MAX", defaults.students_max),
            rng_seed: parse_or(&lookup, "SEED_RNG_SEED", defaults.rng_seed),
        }
        .normalized()
    }

    /// Sets the class size range.
    pub fn with_students(mut self, min: u64, max: u64) -> Self {
        self.students_min = min;
        self.students_max = max;
        self.normalized()
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Swaps an inverted range so `students_min <= students_max` always holds.
    fn normalized(mut self) -> Self {
        if self.students_min > self.students_max {
            std::mem::swap(&mut self.students_min, &mut self.students_max);
        }
        self
    }
}
