use super::answers::{parse_leading_int, AnswerSet};
use serde::Serialize;

/// Questions that must be answered before scoring, in survey order.
const REQUIRED_QUESTIONS: &[&str] = &[
    "age",
    "gender",
    "diet-quality",
    "exercise",
    "sleep",
    "smoker",
    "outdoor-time",
];

const AGE_MIN: i64 = 18;
const AGE_MAX: i64 = 120;
const HEIGHT_MIN_CM: i64 = 100;
const HEIGHT_MAX_CM: i64 = 250;
const WEIGHT_MIN_KG: i64 = 30;
const WEIGHT_MAX_KG: i64 = 300;

/// One failed intake check, with the survey-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntakeViolation {
    pub question: &'static str,
    pub message: &'static str,
}

/// Every intake failure for a submission. Checks never stop at the first
/// problem so callers can surface all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission has {} intake violation(s)", .violations.len())]
pub struct IntakeRejection {
    pub violations: Vec<IntakeViolation>,
}

/// Validates submissions before they reach the scoring engine. The engine
/// itself is total and will score anything; service entry points must pass
/// submissions through the guard first.
#[derive(Debug, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Checks the submission, collecting every violation.
    ///
    /// Age is mandatory and must parse to 18..=120. Height and weight are
    /// optional but must fall in 100..=250 cm and 30..=300 kg when present.
    pub fn check(&self, answers: &AnswerSet) -> Result<(), IntakeRejection> {
        let mut violations = Vec::new();

        if let Some(age) = answers.scalar("age") {
            match parse_leading_int(age) {
                None => violations.push(IntakeViolation {
                    question: "age",
                    message: "Age must be a number.",
                }),
                Some(age) if age < AGE_MIN => violations.push(IntakeViolation {
                    question: "age",
                    message: "You must be at least 18 years old to use this calculator.",
                }),
                Some(age) if age > AGE_MAX => violations.push(IntakeViolation {
                    question: "age",
                    message: "Please enter an age below 120.",
                }),
                Some(_) => {}
            }
        }

        if let Some(height) = answers.scalar("height") {
            match parse_leading_int(height) {
                None => violations.push(IntakeViolation {
                    question: "height",
                    message: "Height must be a number.",
                }),
                Some(height) if height < HEIGHT_MIN_CM => violations.push(IntakeViolation {
                    question: "height",
                    message: "Height seems too low. Please enter height in centimeters.",
                }),
                Some(height) if height > HEIGHT_MAX_CM => violations.push(IntakeViolation {
                    question: "height",
                    message: "Height seems too high. Please enter height in centimeters.",
                }),
                Some(_) => {}
            }
        }

        if let Some(weight) = answers.scalar("weight") {
            match parse_leading_int(weight) {
                None => violations.push(IntakeViolation {
                    question: "weight",
                    message: "Weight must be a number.",
                }),
                Some(weight) if weight < WEIGHT_MIN_KG => violations.push(IntakeViolation {
                    question: "weight",
                    message: "Weight seems too low. Please enter weight in kilograms.",
                }),
                Some(weight) if weight > WEIGHT_MAX_KG => violations.push(IntakeViolation {
                    question: "weight",
                    message: "Weight seems too high. Please enter weight in kilograms.",
                }),
                Some(_) => {}
            }
        }

        for &question in REQUIRED_QUESTIONS {
            if !answers.has_answer(question) {
                violations.push(IntakeViolation {
                    question,
                    message: "This field is required",
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(IntakeRejection { violations })
        }
    }
}
