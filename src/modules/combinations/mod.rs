pub mod service;

pub use service::CombinationService;
