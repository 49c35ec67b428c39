pub mod service;

pub use service::GradeService;
