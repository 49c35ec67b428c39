//! # Classtree Models
//!
//! Domain models and DTOs for the classtree hierarchy engine.
//!
//! # Modules
//!
//! - [`ids`]: Typed entity ids and the identifier generator
//! - [`hierarchy`]: Levels, grades, sub-grades and combinations
//! - [`classes`]: Derived classes and listing filters
//! - [`dto`]: Create/update request shapes with validation rules
//! - [`cascade`]: Cascade-delete impact types
//! - [`stats`]: Summary totals
//!
//! # Example
//!
//! ```ignore
//! use classtree_models::{CascadeTarget, LevelId, NodePatch};
//!
//! let target = CascadeTarget::Level(level_id);
//! let patch = NodePatch::rename("Senior 1");
//! ```

pub mod cascade;
pub mod classes;
pub mod dto;
pub mod hierarchy;
pub mod ids;
pub mod stats;

// Re-export commonly used types at crate root for convenience
pub use cascade::{CascadeCounts, CascadeDeleteInfo, CascadeTarget};
pub use classes::{ClassFilterParams, DerivedClass, PaginatedClassesResponse};
pub use dto::{CreateNodeDto, NodePatch};
pub use hierarchy::{
    Combination, ExpansionKind, Grade, Level, NamedNode, SubGrade, in_display_order, next_order,
};
pub use ids::{CombinationId, DerivedClassId, GradeId, IdGenerator, LevelId, SubGradeId};
pub use stats::HierarchyStats;
