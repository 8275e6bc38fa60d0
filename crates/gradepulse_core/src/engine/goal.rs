//! Goal-seeking inverse of the cumulative merge.
//!
//! # Responsibility
//! - Solve for the next-term SGPA that would lift the CGPA to a target.
//! - Classify the solution for display (unreachable / secured / numeric).
//!
//! # Invariants
//! - A missing or degenerate input yields `None`, a defined non-error
//!   outcome, never a fault.
//! - No rounding happens here; 2-decimal rendering is a presentation
//!   concern of the caller.

use std::fmt::{Display, Formatter};

use crate::model::course::MAX_GRADE_POINT;

use super::stats::OverallStats;

/// Classified outcome of the required-SGPA solve.
///
/// Every variant carries the raw solution so callers can still render the
/// number behind an "impossible" or "already there" verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequiredSgpa {
    /// Above the scale maximum: the goal cannot be reached in one term.
    Unreachable { required: f64 },
    /// Zero or negative: the goal holds regardless of next-term performance.
    AlreadySecured { required: f64 },
    /// A concrete SGPA target for the next term.
    Achievable { required: f64 },
}

impl RequiredSgpa {
    /// Raw solution of the inverse merge, unclassified.
    pub fn required(&self) -> f64 {
        match self {
            Self::Unreachable { required }
            | Self::AlreadySecured { required }
            | Self::Achievable { required } => *required,
        }
    }
}

impl Display for RequiredSgpa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable { required } => {
                write!(f, "unreachable in one term (needs {required:.2})")
            }
            Self::AlreadySecured { .. } => write!(f, "already secured"),
            Self::Achievable { required } => write!(f, "{required:.2}"),
        }
    }
}

/// Solves for the minimum next-term SGPA that reaches `desired_cgpa`.
///
/// Returns `None` when `next_sem_credits` is zero, negative, or non-finite,
/// or when any other input is non-finite. Absent user input never produces
/// a number; it suppresses the figure.
///
/// Inverse of the weighted-average merge:
/// `required = (desired x (total + next) - cgpa x total) / next`.
pub fn required_next_term_sgpa(
    overall: &OverallStats,
    desired_cgpa: f64,
    next_sem_credits: f64,
) -> Option<RequiredSgpa> {
    if !desired_cgpa.is_finite() || !next_sem_credits.is_finite() {
        return None;
    }
    if !overall.cgpa.is_finite() || !overall.total_credits.is_finite() {
        return None;
    }
    if next_sem_credits <= 0.0 {
        return None;
    }

    let current_points = overall.total_points();
    let future_credits = overall.total_credits + next_sem_credits;
    let target_points = desired_cgpa * future_credits;
    let required = (target_points - current_points) / next_sem_credits;

    Some(if required > MAX_GRADE_POINT {
        RequiredSgpa::Unreachable { required }
    } else if required <= 0.0 {
        RequiredSgpa::AlreadySecured { required }
    } else {
        RequiredSgpa::Achievable { required }
    })
}
