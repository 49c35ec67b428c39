use serde::{Deserialize, Serialize};

/// Node and class totals for a store, shown on summary views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyStats {
    pub levels: usize,
    pub grades: usize,
    pub sub_grades: usize,
    pub combinations: usize,
    pub derived_classes: usize,
}
