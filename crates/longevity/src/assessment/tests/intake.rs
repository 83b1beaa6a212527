use super::common::*;
use crate::assessment::answers::AnswerSet;

#[test]
fn complete_submission_passes() {
    assert!(guard().check(&baseline_answers()).is_ok());
}

#[test]
fn age_bounds_are_inclusive() {
    assert!(guard().check(&baseline_answers().with("age", "18")).is_ok());
    assert!(guard().check(&baseline_answers().with("age", "120")).is_ok());

    let too_young = guard()
        .check(&baseline_answers().with("age", "17"))
        .expect_err("age 17 rejected");
    assert_eq!(
        too_young.violations[0].message,
        "You must be at least 18 years old to use this calculator."
    );

    let too_old = guard()
        .check(&baseline_answers().with("age", "121"))
        .expect_err("age 121 rejected");
    assert_eq!(too_old.violations[0].message, "Please enter an age below 120.");
}

#[test]
fn non_numeric_age_is_rejected() {
    let rejection = guard()
        .check(&baseline_answers().with("age", "abc"))
        .expect_err("non-numeric age rejected");
    assert_eq!(rejection.violations[0].question, "age");
    assert_eq!(rejection.violations[0].message, "Age must be a number.");
}

#[test]
fn decorated_numbers_parse_by_leading_digits() {
    assert!(guard().check(&baseline_answers().with("age", "45 years")).is_ok());
    assert!(guard()
        .check(
            &baseline_answers()
                .with("height", "170cm")
                .with("weight", "70kg")
        )
        .is_ok());
}

#[test]
fn height_and_weight_are_optional_but_bounded() {
    assert!(guard().check(&baseline_answers().with("height", "")).is_ok());

    let checks = [
        ("height", "99", "Height seems too low. Please enter height in centimeters."),
        ("height", "251", "Height seems too high. Please enter height in centimeters."),
        ("height", "tall", "Height must be a number."),
        ("weight", "29", "Weight seems too low. Please enter weight in kilograms."),
        ("weight", "301", "Weight seems too high. Please enter weight in kilograms."),
        ("weight", "heavy", "Weight must be a number."),
    ];
    for (question, value, message) in checks {
        let rejection = guard()
            .check(&baseline_answers().with(question, value))
            .expect_err("out of range measurement rejected");
        assert_eq!(rejection.violations.len(), 1);
        assert_eq!(rejection.violations[0].question, question);
        assert_eq!(rejection.violations[0].message, message);
    }

    assert!(guard().check(&baseline_answers().with("height", "100")).is_ok());
    assert!(guard().check(&baseline_answers().with("height", "250")).is_ok());
    assert!(guard().check(&baseline_answers().with("weight", "30")).is_ok());
    assert!(guard().check(&baseline_answers().with("weight", "300")).is_ok());
}

#[test]
fn missing_required_questions_are_each_reported() {
    let rejection = guard()
        .check(&AnswerSet::new().with("age", "44"))
        .expect_err("incomplete submission rejected");

    assert_eq!(rejection.violations.len(), 6);
    assert!(rejection
        .violations
        .iter()
        .all(|violation| violation.message == "This field is required"));
    let questions: Vec<&str> = rejection
        .violations
        .iter()
        .map(|violation| violation.question)
        .collect();
    assert!(questions.contains(&"gender"));
    assert!(questions.contains(&"outdoor-time"));
    assert!(!questions.contains(&"age"));
}

#[test]
fn all_violations_are_collected_in_one_pass() {
    let rejection = guard()
        .check(
            &AnswerSet::new()
                .with("age", "12")
                .with("height", "40")
                .with("weight", "500"),
        )
        .expect_err("multiple problems rejected");

    // One range violation each plus the six unanswered required questions.
    assert_eq!(rejection.violations.len(), 9);
    assert_eq!(rejection.to_string(), "submission has 9 intake violation(s)");
}

#[test]
fn empty_answers_for_required_questions_count_as_missing() {
    let rejection = guard()
        .check(&baseline_answers().with("gender", ""))
        .expect_err("blank required answer rejected");

    assert_eq!(rejection.violations.len(), 1);
    assert_eq!(rejection.violations[0].question, "gender");
    assert_eq!(rejection.violations[0].message, "This field is required");
}
