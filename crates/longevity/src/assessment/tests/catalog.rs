use std::collections::HashSet;

use crate::assessment::answers::AnswerSet;
use crate::assessment::catalog::{catalog_for, ScoringProfile, DEFAULT_CONFIDENCE};
use crate::assessment::domain::{Category, ModelVersion};

fn bmi_answers(height: &str, weight: &str) -> AnswerSet {
    AnswerSet::new()
        .with("height", height)
        .with("weight", weight)
}

fn basic_factor_name(answers: &AnswerSet) -> Option<String> {
    let evaluations = catalog_for(ModelVersion::Baseline).evaluate(answers);
    evaluations
        .get(&Category::Basic)
        .and_then(|evaluation| evaluation.factors.first())
        .map(|factor| factor.name.clone())
}

#[test]
fn extended_catalog_carries_the_additional_questions() {
    let baseline: Vec<&str> = catalog_for(ModelVersion::Baseline)
        .questions_for_tests()
        .iter()
        .map(|rules| rules.question)
        .collect();
    let extended: Vec<&str> = catalog_for(ModelVersion::Extended)
        .questions_for_tests()
        .iter()
        .map(|rules| rules.question)
        .collect();

    assert!(!baseline.contains(&"anxiety"));
    assert!(!baseline.contains(&"close-relationships"));
    assert!(extended.contains(&"anxiety"));
    assert!(extended.contains(&"depression"));
    assert!(extended.contains(&"community-involvement"));
    assert!(extended.len() > baseline.len());
}

#[test]
fn factor_values_are_unique_per_question() {
    for model in [ModelVersion::Baseline, ModelVersion::Extended] {
        let mut seen = HashSet::new();
        for rules in catalog_for(model).questions_for_tests() {
            for option in rules.options {
                assert!(
                    seen.insert((rules.question, option.value)),
                    "duplicate option {}={} in {} catalog",
                    rules.question,
                    option.value,
                    model.label()
                );
            }
        }
    }
}

#[test]
fn gates_reference_questions_in_the_same_catalog() {
    for model in [ModelVersion::Baseline, ModelVersion::Extended] {
        let catalog = catalog_for(model);
        for rules in catalog.questions_for_tests() {
            if let Some(gate) = rules.gate {
                assert!(
                    catalog
                        .questions_for_tests()
                        .iter()
                        .any(|other| other.question == gate.question),
                    "gate on {} references unknown question {}",
                    rules.question,
                    gate.question
                );
            }
        }
    }
}

#[test]
fn baseline_catalog_flattens_confidences() {
    for rules in catalog_for(ModelVersion::Baseline).questions_for_tests() {
        assert!((rules.confidence - DEFAULT_CONFIDENCE).abs() < 1e-9);
    }

    let smoker = catalog_for(ModelVersion::Extended)
        .questions_for_tests()
        .iter()
        .find(|rules| rules.question == "smoker")
        .expect("smoker rules present");
    assert!((smoker.confidence - 0.95).abs() < 1e-9);
}

#[test]
fn extended_catalog_recategorises_mental_and_social_questions() {
    let category_of = |model: ModelVersion, question: &str| {
        catalog_for(model)
            .questions_for_tests()
            .iter()
            .find(|rules| rules.question == question)
            .map(|rules| rules.category)
            .expect("question present")
    };

    assert_eq!(category_of(ModelVersion::Baseline, "stress"), Category::Lifestyle);
    assert_eq!(category_of(ModelVersion::Extended, "stress"), Category::MentalHealth);
    assert_eq!(category_of(ModelVersion::Baseline, "social"), Category::Lifestyle);
    assert_eq!(
        category_of(ModelVersion::Extended, "social"),
        Category::SocialConnection
    );
    assert_eq!(
        category_of(ModelVersion::Extended, "mindfulness"),
        Category::MentalHealth
    );
}

#[test]
fn bmi_bands_cover_the_whole_range() {
    assert_eq!(
        basic_factor_name(&bmi_answers("170", "50")).as_deref(),
        Some("BMI (Underweight)")
    );
    assert_eq!(
        basic_factor_name(&bmi_answers("170", "65")).as_deref(),
        Some("BMI (Normal)")
    );
    assert_eq!(
        basic_factor_name(&bmi_answers("170", "75")).as_deref(),
        Some("BMI (Overweight)")
    );
    assert_eq!(
        basic_factor_name(&bmi_answers("170", "95")).as_deref(),
        Some("BMI (Obese)")
    );
}

#[test]
fn zero_height_lands_in_the_unbounded_band() {
    assert_eq!(
        basic_factor_name(&bmi_answers("0", "70")).as_deref(),
        Some("BMI (Obese)")
    );
}

#[test]
fn bmi_requires_both_numeric_measurements() {
    assert_eq!(basic_factor_name(&bmi_answers("", "70")), None);
    assert_eq!(basic_factor_name(&bmi_answers("170", "")), None);
    assert_eq!(basic_factor_name(&bmi_answers("tall", "70")), None);
    assert_eq!(basic_factor_name(&AnswerSet::new().with("height", "170")), None);
}

#[test]
fn bmi_parses_leading_digits_from_decorated_values() {
    assert_eq!(
        basic_factor_name(&bmi_answers("170cm", "65kg")).as_deref(),
        Some("BMI (Normal)")
    );
}

#[test]
fn chronic_conditions_accumulate_and_cap() {
    let catalog = catalog_for(ModelVersion::Baseline);

    let two = catalog.evaluate(
        &AnswerSet::new().with("conditions", vec!["diabetes", "hypertension"]),
    );
    let medical = &two[&Category::Medical];
    assert_eq!(medical.score, -2);
    let factor = &medical.factors[0];
    assert_eq!(factor.name, "Chronic Health Conditions");
    assert!((factor.impact - 3.0).abs() < 1e-9);
    assert_eq!(
        factor.description,
        "Having 2 chronic conditions increases biological age"
    );

    let five = catalog.evaluate(&AnswerSet::new().with(
        "conditions",
        vec!["a", "b", "c", "d", "e"],
    ));
    let medical = &five[&Category::Medical];
    assert_eq!(medical.score, -3);
    assert!((medical.factors[0].impact - 6.0).abs() < 1e-9);

    let none = catalog.evaluate(&AnswerSet::new().with("conditions", Vec::<String>::new()));
    assert!(none[&Category::Medical].factors.is_empty());
}

#[test]
fn gated_questions_require_the_gate_to_pass() {
    let catalog = catalog_for(ModelVersion::Baseline);

    let ungated = catalog.evaluate(
        &AnswerSet::new()
            .with("exercise", "none")
            .with("exercise-intensity", "high"),
    );
    assert!(!ungated[&Category::Activity]
        .factors
        .iter()
        .any(|factor| factor.name.contains("Intensity")));

    let gated = catalog.evaluate(
        &AnswerSet::new()
            .with("exercise", "regular")
            .with("exercise-intensity", "high"),
    );
    assert!(gated[&Category::Activity].factors.len() > 1);

    let missing_gate = catalog.evaluate(&AnswerSet::new().with("exercise-intensity", "high"));
    assert!(missing_gate[&Category::Activity].factors.is_empty());
}

#[test]
fn unknown_answer_values_are_ignored() {
    let catalog = catalog_for(ModelVersion::Baseline);
    let evaluations = catalog.evaluate(
        &AnswerSet::new()
            .with("diet-quality", "mediocre")
            .with("smoker", "no"),
    );

    assert!(evaluations[&Category::Diet].factors.is_empty());
    assert!(evaluations[&Category::Lifestyle].factors.is_empty());
}

#[test]
fn profile_weights_sum_to_one() {
    for profile in [ScoringProfile::baseline(), ScoringProfile::extended()] {
        let total: f64 = profile
            .categories()
            .iter()
            .map(|&category| profile.weight(category))
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(profile
            .categories()
            .iter()
            .all(|&category| profile.max_score(category) > 0));
    }
}
