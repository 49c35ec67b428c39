pub mod naming;
pub mod service;

pub use service::{ClassService, derive_classes};
