use super::common::*;
use crate::assessment::answers::AnswerSet;
use crate::assessment::domain::Priority;
use crate::assessment::recommend::identify_pattern;
use crate::assessment::{
    generate_recommendations, MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS,
};

fn recommendations_for(answers: &AnswerSet) -> Vec<crate::assessment::Recommendation> {
    let outcome = baseline_engine().evaluate(answers);
    generate_recommendations(answers, &outcome)
}

#[test]
fn protective_profiles_are_topped_up_to_the_minimum() {
    let recommendations = recommendations_for(&baseline_answers());

    assert_eq!(recommendations.len(), MIN_RECOMMENDATIONS);
    assert!(recommendations
        .iter()
        .all(|recommendation| recommendation.priority != Priority::High));

    let fillers = recommendations
        .iter()
        .filter(|recommendation| recommendation.category == "General Longevity")
        .count();
    assert_eq!(fillers, 2);

    let strengths = recommendations
        .iter()
        .find(|recommendation| recommendation.category == "Strengths")
        .expect("strengths recommendation present");
    assert!(strengths.text.contains("Optimal Sleep, Occasional Exercise"));
}

#[test]
fn adverse_profiles_rank_high_priority_findings_first() {
    let recommendations = recommendations_for(&adverse_answers());

    assert_eq!(recommendations.len(), 6);
    assert_eq!(recommendations[0].category, "Diet");

    let focus = recommendations
        .iter()
        .find(|recommendation| recommendation.category == "Priority Focus Areas")
        .expect("focus recommendation present");
    assert_eq!(focus.priority, Priority::High);
    assert!(focus
        .text
        .contains("Current Smoker, Poor Diet Quality, Insufficient Sleep"));

    for pair in recommendations.windows(2) {
        assert!(pair[0].priority.rank() <= pair[1].priority.rank());
    }
    assert_eq!(
        recommendations.last().map(|recommendation| recommendation.priority),
        Some(Priority::Medium)
    );
}

#[test]
fn heavily_flagged_profiles_cap_at_the_maximum() {
    let answers = adverse_answers()
        .with("stress", "high")
        .with("social", "isolated")
        .with("conditions", vec!["diabetes"])
        .with("alcohol", "heavy")
        .with("checkups", "never")
        .with("sleep-quality", "poor");
    let recommendations = recommendations_for(&answers);

    assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
    assert!(recommendations
        .iter()
        .all(|recommendation| recommendation.priority == Priority::High));
}

#[test]
fn age_brackets_add_targeted_advice() {
    let young = recommendations_for(&optimal_answers("25"));
    let strategy = young
        .iter()
        .find(|recommendation| recommendation.category == "Age-Specific Strategy")
        .expect("young bracket advice present");
    assert!(strategy.text.contains("critical window"));

    let senior = recommendations_for(&optimal_answers("65"));
    let strategy = senior
        .iter()
        .find(|recommendation| recommendation.category == "Age-Specific Strategy")
        .expect("senior bracket advice present");
    assert!(strategy.text.contains("after 60"));

    let midlife = recommendations_for(&baseline_answers());
    assert!(midlife
        .iter()
        .all(|recommendation| recommendation.category != "Age-Specific Strategy"));
}

#[test]
fn deduplication_keys_on_category_and_text() {
    let answers = baseline_answers()
        .with("diet-quality", "poor")
        .with("processed-food", "high");
    let recommendations = recommendations_for(&answers);

    let diet: Vec<&str> = recommendations
        .iter()
        .filter(|recommendation| recommendation.category == "Diet")
        .map(|recommendation| recommendation.text.as_str())
        .collect();
    assert_eq!(diet.len(), 2);
    assert_ne!(diet[0], diet[1]);
}

#[test]
fn lifestyle_patterns_contribute_one_personalised_entry() {
    let answers = baseline_answers()
        .with("exercise", "regular")
        .with("stress", "high");
    let recommendations = recommendations_for(&answers);

    let personalised: Vec<_> = recommendations
        .iter()
        .filter(|recommendation| recommendation.category == "Personalized Approach")
        .collect();
    assert_eq!(personalised.len(), 1);
    assert!(personalised[0].text.contains("complementing your physical routine"));

    assert!(recommendations
        .iter()
        .any(|recommendation| recommendation.category == "Mental Health"
            && recommendation.priority == Priority::High));
}

#[test]
fn pattern_matching_stops_at_the_first_cluster() {
    let busy = AnswerSet::new()
        .with("stress", "high")
        .with("exercise", "occasional")
        .with("sleep", "less")
        .with("screen-time", "high")
        .with("diet-quality", "good")
        .with("daily-movement", "sedentary");
    assert_eq!(
        identify_pattern(&busy).map(|pattern| pattern.key),
        Some("busy-professional")
    );

    let sedentary = busy.clone().with("sleep", "optimal");
    assert_eq!(
        identify_pattern(&sedentary).map(|pattern| pattern.key),
        Some("health-diet-sedentary")
    );

    assert_eq!(identify_pattern(&AnswerSet::new()), None);
}

#[test]
fn sparse_answers_still_produce_the_minimum_list() {
    let recommendations = recommendations_for(&AnswerSet::new());

    assert_eq!(recommendations.len(), MIN_RECOMMENDATIONS);
    let fillers = recommendations
        .iter()
        .filter(|recommendation| recommendation.category == "General Longevity")
        .count();
    assert_eq!(fillers, 4);
}
