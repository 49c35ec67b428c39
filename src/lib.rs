//! # classtree
//!
//! An in-memory engine for a school's class structure. It keeps a
//! four-level hierarchy and derives the list of concrete classes from it.
//!
//! ## Overview
//!
//! - **Hierarchy**: levels own grades; grades own sub-grades (sections such
//!   as "A") and combinations (subject streams such as "MCB")
//! - **Derivation**: every grade expands into one or more derived classes
//!   named like "S1", "S1 A", "S5 MCB" or "S5 MCB A"
//! - **Validation**: sibling name uniqueness and advisory messages for
//!   grades that mix sections and streams
//! - **Cascade analysis**: what a delete would take with it, including
//!   students reported by an external roster
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # `classtree` commands, path resolution, demo seeding
//! ├── modules/          # Feature modules
//! │   ├── levels/      # Level CRUD
//! │   ├── grades/      # Grade CRUD
//! │   ├── sub_grades/  # Sub-grade CRUD
//! │   ├── combinations/# Combination CRUD
//! │   ├── classes/     # Derivation engine and class queries
//! │   └── cascade/     # Cascade-delete impact and rosters
//! ├── export.rs         # JSON snapshots
//! ├── store.rs          # The root aggregate
//! └── validator.rs      # Structural checks
//! ```
//!
//! Each feature module exposes a stateless service whose associated
//! functions take the [`ClassesStore`] by reference.
//!
//! ## Derivation Rules
//!
//! | Grade has                  | Derived classes                          |
//! |----------------------------|------------------------------------------|
//! | nothing                    | the grade itself                         |
//! | sub-grades                 | one per sub-grade                        |
//! | combinations               | one per combination                      |
//! | both                       | each combination, then it with each sub-grade |
//!
//! Derived classes are never edited. After any structural change call
//! [`ClassService::regenerate_derived_classes`].
//!
//! ## Quick Start
//!
//! ```
//! use classtree::{ClassService, ClassesStore, GradeService, LevelService, SubGradeService};
//!
//! let mut store = ClassesStore::new();
//! let level_id = LevelService::add_level(&mut store, "O-Level", None).id;
//! let grade_id = GradeService::add_grade(&mut store, level_id, "S1", None)
//!     .map(|g| g.id)
//!     .unwrap();
//! SubGradeService::add_sub_grade(&mut store, grade_id, "A", None);
//! ClassService::regenerate_derived_classes(&mut store);
//!
//! assert_eq!(store.derived_classes()[0].name, "S1 A");
//! assert_eq!(store.derived_classes()[0].full_path, "O-Level / S1 / A");
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! CLASS_PATH_SEPARATOR=" / "
//! ID_STRATEGY=random
//! LOG_LEVEL=info
//! LOG_FORMAT=compact
//! SEED_RNG_SEED=42
//! ```

pub mod cli;
pub mod export;
pub mod modules;
pub mod store;
pub mod validator;

pub use modules::{
    CascadeService, ClassService, CombinationService, GradeService, LevelService, Roster,
    StudentCounts, SubGradeService,
};
pub use store::ClassesStore;

// Re-export workspace crates for convenience
pub use classtree_config;
pub use classtree_core;
pub use classtree_models;
