//! Fixed default snapshot.
//!
//! # Responsibility
//! - Provide the hardcoded course list and history record a reset restores.
//!
//! # Invariants
//! - Seed course ids are fixed so a reset restores the exact same records,
//!   not lookalikes with fresh identities.

use uuid::Uuid;

use crate::model::course::Course;
use crate::model::history::AcademicHistory;

/// The eight-course default term.
pub fn seed_courses() -> Vec<Course> {
    vec![
        seed_course(1, "CET-101", "CAD in Structural Analysis", 2.0, 10.0),
        seed_course(2, "HSS-306", "Introduction to Cyberpsychology", 3.0, 9.0),
        seed_course(3, "CEC-399", "Community Outreach", 2.0, 10.0),
        seed_course(4, "CEC-351", "Fundamentals of AI/ML", 2.0, 8.0),
        seed_course(5, "CEC-301", "Soil Mechanics", 3.0, 7.0),
        seed_course(6, "CEC-303", "Waste Water Engineering", 3.0, 8.0),
        seed_course(7, "CEC-305", "Design of Steel Elements", 3.0, 9.0),
        seed_course(8, "CEC-307", "Highway and Traffic Engineering", 3.0, 8.0),
    ]
}

/// The default prior standing: CGPA 8.5 over 89 credits.
pub fn seed_history() -> AcademicHistory {
    AcademicHistory::new(8.5, 89.0)
}

fn seed_course(slot: u128, code: &str, name: &str, credits: f64, grade_point: f64) -> Course {
    // Seed identity is derived from the slot number, not randomly generated,
    // so two resets produce identical records.
    Course::with_id(Uuid::from_u128(slot), code, name, credits, grade_point)
}
