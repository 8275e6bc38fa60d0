//! Academic history record.
//!
//! # Responsibility
//! - Carry the two prior-terms aggregates the cumulative merge needs.
//! - Coerce raw text input into valid numbers, never rejecting it.
//!
//! # Invariants
//! - `current_cgpa` stays in `[0, 10]`, `previous_total_credits` is
//!   non-negative after normalization.

use serde::{Deserialize, Serialize};

use crate::model::course::clamp_grade_point;

/// Cumulative standing accumulated before the current term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicHistory {
    /// CGPA on the 0-10 scale, before the current term.
    pub current_cgpa: f64,
    /// Total credit hours earned before the current term.
    pub previous_total_credits: f64,
}

impl AcademicHistory {
    /// Creates a history record, clamping both fields into bounds.
    pub fn new(current_cgpa: f64, previous_total_credits: f64) -> Self {
        Self {
            current_cgpa: clamp_grade_point(current_cgpa),
            previous_total_credits: clamp_credit_total(previous_total_credits),
        }
    }

    /// Replaces the CGPA from raw text, coercing garbage to `0`.
    pub fn set_current_cgpa_raw(&mut self, raw: &str) {
        self.current_cgpa = clamp_grade_point(coerce_numeric(raw));
    }

    /// Replaces the prior credit total from raw text, coercing garbage to `0`.
    pub fn set_previous_total_credits_raw(&mut self, raw: &str) {
        self.previous_total_credits = clamp_credit_total(coerce_numeric(raw));
    }
}

/// Parses raw user text as a number, mapping failures to `0`.
///
/// Malformed input must suppress a figure, never fault the computation.
pub fn coerce_numeric(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

fn clamp_credit_total(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.max(0.0)
}
