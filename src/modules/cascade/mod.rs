pub mod roster;
pub mod service;

pub use roster::{Roster, StudentCounts};
pub use service::CascadeService;
