//! Seed shapes for building a mock hierarchy.
//!
//! Seeds carry names only; ids are issued when the seeds are applied to a
//! store.

/// Seed data for creating a level with its grades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSeed {
    pub name: String,
    pub grades: Vec<GradeSeed>,
}

/// Seed data for creating a grade with its sections and streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSeed {
    pub name: String,
    pub sub_grades: Vec<String>,
    pub combinations: Vec<String>,
}

impl GradeSeed {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub_grades: Vec::new(),
            combinations: Vec::new(),
        }
    }

    pub fn with_sub_grades(mut self, names: &[&str]) -> Self {
        self.sub_grades = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_combinations(mut self, names: &[&str]) -> Self {
        self.combinations = names.iter().map(|n| n.to_string()).collect();
        self
    }
}

impl LevelSeed {
    /// Number of classes these seeds expand to once derived.
    pub fn expected_class_count(&self) -> usize {
        self.grades
            .iter()
            .map(|g| match (g.combinations.len(), g.sub_grades.len()) {
                (0, 0) => 1,
                (m, 0) => m,
                (0, n) => n,
                (m, n) => m * n + m,
            })
            .sum()
    }
}
