use gradepulse_core::{
    CourseEdit, Gradebook, LetterGrade, RequiredSgpa, SessionError,
};
use uuid::Uuid;

const EPSILON: f64 = 1e-9;

fn approx_eq(left: f64, right: f64) {
    assert!(
        (left - right).abs() < EPSILON,
        "expected {left} to approximately equal {right}"
    );
}

#[test]
fn new_session_holds_the_seed_snapshot() {
    let book = Gradebook::new();
    assert_eq!(book.courses().len(), 8);
    assert_eq!(book.courses()[0].code, "CET-101");
    assert_eq!(book.history().current_cgpa, 8.5);
    assert_eq!(book.history().previous_total_credits, 89.0);
}

#[test]
fn seed_snapshot_produces_the_worked_statistics() {
    let book = Gradebook::new();
    let semester = book.semester_stats();
    assert_eq!(semester.total_credits, 21.0);
    approx_eq(semester.sgpa, 179.0 / 21.0);

    let overall = book.overall_stats();
    assert_eq!(overall.total_credits, 110.0);
    approx_eq(overall.cgpa, 935.5 / 110.0);
}

#[test]
fn add_course_appends_defaults_with_a_fresh_id() {
    let mut book = Gradebook::new();
    let id = book.add_course();

    let added = book.courses().last().unwrap();
    assert_eq!(added.id, id);
    assert_eq!(added.code, "NEW-101");
    assert_eq!(added.name, "New Course");
    assert_eq!(added.credits, 3.0);
    assert_eq!(added.grade_point, 8.0);

    let other_id = book.add_course();
    assert_ne!(id, other_id);
}

#[test]
fn update_course_edits_exactly_one_field() {
    let mut book = Gradebook::new();
    let id = book.courses()[4].id;

    book.update_course(id, CourseEdit::GradePoint(9.0)).unwrap();
    let course = &book.courses()[4];
    assert_eq!(course.grade_point, 9.0);
    assert_eq!(course.code, "CEC-301");
    assert_eq!(course.credits, 3.0);

    book.update_course(id, CourseEdit::Name("Geotechnics".into()))
        .unwrap();
    assert_eq!(book.courses()[4].name, "Geotechnics");
}

#[test]
fn update_clamps_out_of_range_numeric_input() {
    let mut book = Gradebook::new();
    let id = book.courses()[0].id;

    book.update_course(id, CourseEdit::Credits(25.0)).unwrap();
    assert_eq!(book.courses()[0].credits, 20.0);

    book.update_course(id, CourseEdit::GradePoint(f64::NAN))
        .unwrap();
    assert_eq!(book.courses()[0].grade_point, 0.0);
}

#[test]
fn picking_a_letter_grade_sets_the_grade_point() {
    let mut book = Gradebook::new();
    let id = book.courses()[3].id;

    book.update_course(id, CourseEdit::Grade(LetterGrade::O))
        .unwrap();
    assert_eq!(book.courses()[3].grade_point, 10.0);

    book.update_course(id, CourseEdit::Grade(LetterGrade::Absent))
        .unwrap();
    assert_eq!(book.courses()[3].grade_point, 0.0);
}

#[test]
fn edits_against_an_unknown_id_return_not_found() {
    let mut book = Gradebook::new();
    let ghost = Uuid::new_v4();

    let update_err = book
        .update_course(ghost, CourseEdit::Credits(3.0))
        .unwrap_err();
    assert_eq!(update_err, SessionError::CourseNotFound(ghost));

    let remove_err = book.remove_course(ghost).unwrap_err();
    assert_eq!(remove_err, SessionError::CourseNotFound(ghost));
}

#[test]
fn add_then_remove_restores_the_prior_list() {
    let mut book = Gradebook::new();
    let before = book.courses().to_vec();

    let id = book.add_course();
    assert_eq!(book.courses().len(), before.len() + 1);

    book.remove_course(id).unwrap();
    assert_eq!(book.courses(), before.as_slice());
}

#[test]
fn remove_keeps_the_order_of_surviving_courses() {
    let mut book = Gradebook::new();
    let removed = book.courses()[2].id;
    let expected: Vec<_> = book
        .courses()
        .iter()
        .filter(|course| course.id != removed)
        .cloned()
        .collect();

    book.remove_course(removed).unwrap();
    assert_eq!(book.courses(), expected.as_slice());
}

#[test]
fn history_setters_coerce_garbage_to_zero() {
    let mut book = Gradebook::new();

    book.set_current_cgpa("not a number");
    assert_eq!(book.history().current_cgpa, 0.0);

    book.set_previous_total_credits("");
    assert_eq!(book.history().previous_total_credits, 0.0);

    book.set_current_cgpa("8.5");
    book.set_previous_total_credits("89");
    assert_eq!(book.history().current_cgpa, 8.5);
    assert_eq!(book.history().previous_total_credits, 89.0);
}

#[test]
fn goal_is_undefined_until_both_fields_parse() {
    let mut book = Gradebook::new();
    assert!(book.required_next_term_sgpa().is_none());

    book.set_desired_cgpa("9.0");
    assert!(book.required_next_term_sgpa().is_none());

    book.set_next_sem_credits("zero");
    assert!(book.required_next_term_sgpa().is_none());

    book.set_next_sem_credits("0");
    assert!(book.required_next_term_sgpa().is_none());

    book.set_next_sem_credits("19");
    let outcome = book.required_next_term_sgpa().unwrap();
    assert!(matches!(outcome, RequiredSgpa::Unreachable { .. }));
}

#[test]
fn goal_against_the_seed_standing_matches_hand_computation() {
    let mut book = Gradebook::new();
    book.set_desired_cgpa("8.0");
    book.set_next_sem_credits("19");

    let outcome = book.required_next_term_sgpa().unwrap();
    match outcome {
        RequiredSgpa::Achievable { required } => approx_eq(required, 96.5 / 19.0),
        other => panic!("expected Achievable, got {other:?}"),
    }
}

#[test]
fn reset_restores_the_exact_seed_regardless_of_edits() {
    let mut book = Gradebook::new();
    let pristine = Gradebook::new();

    let id = book.courses()[0].id;
    book.update_course(id, CourseEdit::Credits(1.0)).unwrap();
    book.remove_course(book.courses()[5].id).unwrap();
    book.add_course();
    book.set_current_cgpa("2.0");
    book.set_previous_total_credits("5");
    book.set_desired_cgpa("9.9");
    book.set_next_sem_credits("12");

    book.reset();

    assert_eq!(book.courses(), pristine.courses());
    assert_eq!(book.history(), pristine.history());
    assert_eq!(book.goal_inputs(), ("", ""));
    assert!(book.required_next_term_sgpa().is_none());
}
