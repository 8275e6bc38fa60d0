//! Core domain logic for GradePulse, a GPA/CGPA calculator.
//! This crate is the single source of truth for grade arithmetic.

pub mod engine;
pub mod logging;
pub mod model;
pub mod session;

pub use engine::goal::{required_next_term_sgpa, RequiredSgpa};
pub use engine::stats::{overall_stats, semester_stats, OverallStats, SemesterStats};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{Course, CourseId, MAX_COURSE_CREDITS, MAX_GRADE_POINT};
pub use model::grade::LetterGrade;
pub use model::history::AcademicHistory;
pub use session::gradebook::{CourseEdit, Gradebook, SessionError, SessionResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
