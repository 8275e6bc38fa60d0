//! Course record model.
//!
//! # Responsibility
//! - Define the per-course record the semester computation aggregates over.
//! - Provide clamping helpers so out-of-range input never reaches the engine.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the record and never reused.
//! - `credits` stays in `[0, 20]`, `grade_point` in `[0, 10]` after clamping.
//! - `code` and `name` are display labels with no computational effect.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a course record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CourseId = Uuid;

/// Upper bound for a single course's credit-hour weight.
pub const MAX_COURSE_CREDITS: f64 = 20.0;

/// Upper bound of the 10-point grade scale.
pub const MAX_GRADE_POINT: f64 = 10.0;

/// One course taken in the current term.
///
/// Field names serialize in camelCase to match the external record schema
/// used by UI collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable ID used for targeted edits and removal.
    pub id: CourseId,
    /// Short course code, e.g. `CEC-301`. Display only.
    pub code: String,
    /// Human-readable course title. Display only.
    pub name: String,
    /// Credit-hour weight used in the weighted average.
    pub credits: f64,
    /// Achieved grade quality on the 0-10 scale.
    pub grade_point: f64,
}

impl Course {
    /// Creates a course with a generated stable ID.
    ///
    /// Numeric fields are clamped into their documented bounds.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: f64,
        grade_point: f64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), code, name, credits, grade_point)
    }

    /// Creates a course with a caller-provided stable ID.
    ///
    /// Used by the seed snapshot, where identity must survive a reset.
    pub fn with_id(
        id: CourseId,
        code: impl Into<String>,
        name: impl Into<String>,
        credits: f64,
        grade_point: f64,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            credits: clamp_credits(credits),
            grade_point: clamp_grade_point(grade_point),
        }
    }

    /// Quality points this course contributes to the semester total.
    pub fn weighted_points(&self) -> f64 {
        self.credits * self.grade_point
    }
}

/// Normalizes a raw credit value into `[0, MAX_COURSE_CREDITS]`.
///
/// Non-finite input (NaN, infinities) maps to `0` rather than being rejected:
/// malformed input suppresses a figure, it never faults.
pub fn clamp_credits(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, MAX_COURSE_CREDITS)
}

/// Normalizes a raw grade point into `[0, MAX_GRADE_POINT]`.
///
/// Non-finite input maps to `0`.
pub fn clamp_grade_point(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, MAX_GRADE_POINT)
}
