pub mod cascade;
pub mod classes;
pub mod combinations;
pub mod grades;
pub mod levels;
pub mod sub_grades;

pub use self::cascade::{CascadeService, Roster, StudentCounts};
pub use self::classes::ClassService;
pub use self::combinations::CombinationService;
pub use self::grades::GradeService;
pub use self::levels::LevelService;
pub use self::sub_grades::SubGradeService;
