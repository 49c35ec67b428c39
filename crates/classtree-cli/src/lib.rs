//! # Classtree CLI
//!
//! Mock data generation for classtree demos and development.
//!
//! This library crate produces seeds only; the `classtree` binary applies
//! them to a store through the hierarchy services.
//!
//! ## Usage
//!
//! ```ignore
//! use classtree_cli::seeder::{generate_hierarchy, generate_class_sizes};
//!
//! let seeds = generate_hierarchy();
//! let sizes = generate_class_sizes(&enrollable_classes, &SeedConfig::default());
//! ```

pub mod seeder;
