//! Gradebook session editor.
//!
//! # Responsibility
//! - Provide stable edit entry points (add/update/remove/reset) for UI
//!   callers over the single mutable snapshot.
//! - Recompute derived statistics from the snapshot on every read.
//!
//! # Invariants
//! - Course ids are unique within the list and never reused.
//! - Record order is display order only; edits never reorder survivors.
//! - Derived readers never mutate the snapshot.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::info;

use crate::engine::goal::{required_next_term_sgpa, RequiredSgpa};
use crate::engine::stats::{overall_stats, semester_stats, OverallStats, SemesterStats};
use crate::model::course::{clamp_credits, clamp_grade_point, Course, CourseId};
use crate::model::grade::LetterGrade;
use crate::model::history::AcademicHistory;
use crate::session::seed::{seed_courses, seed_history};

/// Default field values for a freshly added course.
const NEW_COURSE_CODE: &str = "NEW-101";
const NEW_COURSE_NAME: &str = "New Course";
const NEW_COURSE_CREDITS: f64 = 3.0;
const NEW_COURSE_GRADE_POINT: f64 = 8.0;

pub type SessionResult<T> = Result<T, SessionError>;

/// Error for targeted edits against the course list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    CourseNotFound(CourseId),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CourseNotFound(id) => write!(f, "course not found: {id}"),
        }
    }
}

impl Error for SessionError {}

/// One editable field per constructor, so an update names exactly what it
/// changes instead of passing a field key at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseEdit {
    Code(String),
    Name(String),
    Credits(f64),
    GradePoint(f64),
    /// Convenience: picks a letter grade, which sets the grade point.
    Grade(LetterGrade),
}

/// The single mutable session snapshot plus its edit surface.
///
/// One writer (the interactive editor) mutates it; derived readers are pure
/// recomputations over the current snapshot.
#[derive(Debug, Clone)]
pub struct Gradebook {
    courses: Vec<Course>,
    history: AcademicHistory,
    desired_cgpa: String,
    next_sem_credits: String,
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Gradebook {
    /// Creates a session holding the fixed seed snapshot.
    pub fn new() -> Self {
        Self {
            courses: seed_courses(),
            history: seed_history(),
            desired_cgpa: String::new(),
            next_sem_credits: String::new(),
        }
    }

    /// Current course list in display order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Current prior-terms history record.
    pub fn history(&self) -> &AcademicHistory {
        &self.history
    }

    /// Raw goal inputs as last entered.
    pub fn goal_inputs(&self) -> (&str, &str) {
        (&self.desired_cgpa, &self.next_sem_credits)
    }

    /// Appends a course with default field values and a fresh id.
    pub fn add_course(&mut self) -> CourseId {
        let course = Course::new(
            NEW_COURSE_CODE,
            NEW_COURSE_NAME,
            NEW_COURSE_CREDITS,
            NEW_COURSE_GRADE_POINT,
        );
        let id = course.id;
        self.courses.push(course);
        info!("event=course_added module=session id={id}");
        id
    }

    /// Applies one field edit to the course with the given id.
    ///
    /// Numeric fields are clamped into their documented bounds on write.
    pub fn update_course(&mut self, id: CourseId, edit: CourseEdit) -> SessionResult<()> {
        let course = self
            .courses
            .iter_mut()
            .find(|course| course.id == id)
            .ok_or(SessionError::CourseNotFound(id))?;

        match edit {
            CourseEdit::Code(code) => course.code = code,
            CourseEdit::Name(name) => course.name = name,
            CourseEdit::Credits(credits) => course.credits = clamp_credits(credits),
            CourseEdit::GradePoint(point) => course.grade_point = clamp_grade_point(point),
            CourseEdit::Grade(grade) => course.grade_point = grade.grade_point(),
        }
        info!("event=course_updated module=session id={id}");
        Ok(())
    }

    /// Removes the course with the given id, keeping the rest in order.
    pub fn remove_course(&mut self, id: CourseId) -> SessionResult<()> {
        let index = self
            .courses
            .iter()
            .position(|course| course.id == id)
            .ok_or(SessionError::CourseNotFound(id))?;
        self.courses.remove(index);
        info!("event=course_removed module=session id={id}");
        Ok(())
    }

    /// Replaces the prior CGPA from raw text; garbage coerces to `0`.
    pub fn set_current_cgpa(&mut self, raw: &str) {
        self.history.set_current_cgpa_raw(raw);
    }

    /// Replaces the prior credit total from raw text; garbage coerces to `0`.
    pub fn set_previous_total_credits(&mut self, raw: &str) {
        self.history.set_previous_total_credits_raw(raw);
    }

    /// Stores the target-CGPA goal field verbatim.
    ///
    /// Parsing is deferred to the derived reader, which treats empty or
    /// non-numeric text as an absent goal.
    pub fn set_desired_cgpa(&mut self, raw: impl Into<String>) {
        self.desired_cgpa = raw.into();
    }

    /// Stores the planned next-term credit load verbatim.
    pub fn set_next_sem_credits(&mut self, raw: impl Into<String>) {
        self.next_sem_credits = raw.into();
    }

    /// Restores the fixed seed snapshot and clears the goal fields.
    ///
    /// The explicit user confirmation step belongs to the caller; this
    /// method performs the restore unconditionally.
    pub fn reset(&mut self) {
        self.courses = seed_courses();
        self.history = seed_history();
        self.desired_cgpa.clear();
        self.next_sem_credits.clear();
        info!("event=session_reset module=session status=ok");
    }

    /// Current-term totals, recomputed from the snapshot.
    pub fn semester_stats(&self) -> SemesterStats {
        semester_stats(&self.courses)
    }

    /// Cumulative totals across history and the current term.
    pub fn overall_stats(&self) -> OverallStats {
        overall_stats(&self.history, &self.semester_stats())
    }

    /// Required next-term SGPA for the entered goal, if the goal is defined.
    ///
    /// `None` when either goal field is empty or non-numeric, or when the
    /// planned credit load is not a positive number.
    pub fn required_next_term_sgpa(&self) -> Option<RequiredSgpa> {
        let desired = parse_goal_field(&self.desired_cgpa)?;
        let next_credits = parse_goal_field(&self.next_sem_credits)?;
        required_next_term_sgpa(&self.overall_stats(), desired, next_credits)
    }
}

/// Parses an optional goal field: empty or non-numeric text means absent.
fn parse_goal_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
