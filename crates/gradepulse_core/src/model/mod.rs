//! Domain model for the GPA calculator.
//!
//! # Responsibility
//! - Define the canonical record shapes consumed by the engine and session.
//! - Normalize raw numeric input into the bounds the engine assumes.
//!
//! # Invariants
//! - Every course is identified by a stable `CourseId`.
//! - Numeric fields stay inside their documented bounds after normalization.

pub mod course;
pub mod grade;
pub mod history;
