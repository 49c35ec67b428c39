//! Mock data seeding.
//!
//! - [`levels`]: the stock school layout
//! - [`roster`]: reproducible class sizes
//! - [`models`]: seed shapes

pub mod levels;
pub mod models;
pub mod roster;

pub use levels::generate_hierarchy;
pub use models::{GradeSeed, LevelSeed};
pub use roster::generate_class_sizes;
