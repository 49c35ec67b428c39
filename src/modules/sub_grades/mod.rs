pub mod service;

pub use service::SubGradeService;
