//! Letter grade scale.
//!
//! # Responsibility
//! - Map the fixed institutional letter grades onto the 0-10 point scale.
//! - Keep labels presentable so UI layers can render a grade picker directly.
//!
//! # Invariants
//! - The scale is fixed; grade points never leave `[0, 10]`.

use serde::{Deserialize, Serialize};

/// Letter grades on the 10-point scale, best to worst.
///
/// `F` and `Absent` both carry zero points but stay distinct so a transcript
/// view can tell a failed course from a missed exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterGrade {
    /// Outstanding.
    O,
    /// Excellent.
    APlus,
    /// Very good.
    A,
    /// Good.
    BPlus,
    /// Above average.
    B,
    /// Average.
    C,
    /// Pass.
    P,
    /// Fail.
    F,
    /// Absent from the exam.
    Absent,
}

impl LetterGrade {
    /// All grades in display order, best first.
    pub const ALL: [LetterGrade; 9] = [
        Self::O,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::C,
        Self::P,
        Self::F,
        Self::Absent,
    ];

    /// Grade point carried by this letter grade.
    pub fn grade_point(self) -> f64 {
        match self {
            Self::O => 10.0,
            Self::APlus => 9.0,
            Self::A => 8.0,
            Self::BPlus => 7.0,
            Self::B => 6.0,
            Self::C => 5.0,
            Self::P => 4.0,
            Self::F | Self::Absent => 0.0,
        }
    }

    /// Display label for grade pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::O => "O (Outstanding)",
            Self::APlus => "A+ (Excellent)",
            Self::A => "A (Very Good)",
            Self::BPlus => "B+ (Good)",
            Self::B => "B (Above Avg)",
            Self::C => "C (Average)",
            Self::P => "P (Pass)",
            Self::F => "F (Fail)",
            Self::Absent => "Ab (Absent)",
        }
    }
}
