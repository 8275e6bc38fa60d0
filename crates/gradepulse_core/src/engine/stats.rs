//! Semester and cumulative statistics.
//!
//! # Responsibility
//! - Aggregate course records into the current-term SGPA.
//! - Merge prior-terms history with the current term into an updated CGPA.
//!
//! # Invariants
//! - Aggregation is order-independent: permuting the course list never
//!   changes the result.
//! - The cumulative merge works on two aggregate totals only; it never
//!   iterates individual courses.

use serde::Serialize;

use crate::model::course::Course;
use crate::model::history::AcademicHistory;

/// Derived figures for the current term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterStats {
    /// Sum of credit hours across the current term's courses.
    pub total_credits: f64,
    /// Credit-weighted average grade point, `0` when no credits exist.
    pub sgpa: f64,
}

/// Derived figures across all terms, history included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    /// Prior credits plus current-term credits.
    pub total_credits: f64,
    /// Credit-weighted average across history and the current term.
    pub cgpa: f64,
}

impl OverallStats {
    /// Total quality points implied by the cumulative average.
    pub fn total_points(&self) -> f64 {
        self.cgpa * self.total_credits
    }
}

/// Computes current-term totals from the course list.
///
/// An empty list (or one whose credits sum to zero) is not an error: the
/// defined fallback is `sgpa = 0`.
pub fn semester_stats(courses: &[Course]) -> SemesterStats {
    let total_credits: f64 = courses.iter().map(|course| course.credits).sum();
    let weighted_points: f64 = courses.iter().map(Course::weighted_points).sum();
    let sgpa = if total_credits > 0.0 {
        weighted_points / total_credits
    } else {
        0.0
    };
    SemesterStats {
        total_credits,
        sgpa,
    }
}

/// Merges prior-terms history with the current term.
///
/// A single weighted average of two point totals, algebraically equivalent
/// to recomputing the CGPA from a combined points/credits accumulator.
pub fn overall_stats(history: &AcademicHistory, semester: &SemesterStats) -> OverallStats {
    let previous_points = history.current_cgpa * history.previous_total_credits;
    let current_points = semester.sgpa * semester.total_credits;
    let total_credits = history.previous_total_credits + semester.total_credits;
    let cgpa = if total_credits > 0.0 {
        (previous_points + current_points) / total_credits
    } else {
        0.0
    };
    OverallStats {
        total_credits,
        cgpa,
    }
}
