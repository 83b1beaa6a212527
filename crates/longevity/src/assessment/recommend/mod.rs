mod patterns;
mod rules;

use super::answers::AnswerSet;
use super::domain::{
    AssessmentOutcome, EvidenceRating, Factor, Priority, Recommendation, TimeToEffect,
};
use std::collections::HashSet;

#[cfg(test)]
pub(crate) use patterns::{identify as identify_pattern, PatternMatch};

/// Fewest recommendations ever returned; the general pool tops the list up.
pub const MIN_RECOMMENDATIONS: usize = 5;
/// Cap on the returned list, even for heavily flagged submissions.
pub const MAX_RECOMMENDATIONS: usize = 8;

/// Builds the ranked advice list for a scored submission.
///
/// Candidates are generated from answer rules, the outcome's strongest
/// factors, the respondent's age bracket, and lifestyle patterns, then
/// deduplicated and sorted by priority. Ties keep generation order. The list
/// grows beyond the minimum only when high-priority findings justify it.
pub fn generate_recommendations(
    answers: &AnswerSet,
    outcome: &AssessmentOutcome,
) -> Vec<Recommendation> {
    let mut recommendations = rules::answer_rules(answers);
    recommendations.extend(adaptive_focus(outcome));
    recommendations.extend(age_bracket(outcome.chronological_age));
    recommendations.extend(patterns::identify(answers).map(|pattern| {
        rec(
            "Personalized Approach",
            pattern.advice,
            Priority::Medium,
            EvidenceRating::Moderate,
            TimeToEffect::Varies,
        )
    }));

    let mut seen = HashSet::new();
    recommendations.retain(|candidate| seen.insert((candidate.category, candidate.text.clone())));

    if recommendations.len() < MIN_RECOMMENDATIONS {
        for filler in rules::general_pool() {
            if recommendations.len() >= MIN_RECOMMENDATIONS {
                break;
            }
            recommendations.push(filler);
        }
    }

    recommendations.sort_by_key(|candidate| candidate.priority.rank());

    let high_count = recommendations
        .iter()
        .filter(|candidate| candidate.priority == Priority::High)
        .count();
    let limit = (high_count + 2).clamp(MIN_RECOMMENDATIONS, MAX_RECOMMENDATIONS);
    recommendations.truncate(limit);
    recommendations
}

/// Highlights the strongest risks and strengths from the scored factors.
fn adaptive_focus(outcome: &AssessmentOutcome) -> Vec<Recommendation> {
    let mut sorted: Vec<&Factor> = outcome.factors.iter().collect();
    sorted.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));

    let mut recommendations = Vec::new();

    let top_risks: Vec<&str> = sorted
        .iter()
        .filter(|factor| factor.impact > 0.0)
        .take(3)
        .map(|factor| factor.name.as_str())
        .collect();
    if !top_risks.is_empty() {
        let names = top_risks.join(", ");
        recommendations.push(rec(
            "Priority Focus Areas",
            format!(
                "Your biggest opportunities for reducing biological age are: {names}. Focus on these areas first for maximum impact on your longevity."
            ),
            Priority::High,
            EvidenceRating::Personalized,
            TimeToEffect::Varies,
        ));
    }

    let top_strengths: Vec<&str> = sorted
        .iter()
        .filter(|factor| factor.impact < 0.0)
        .take(2)
        .map(|factor| factor.name.as_str())
        .collect();
    if !top_strengths.is_empty() {
        let names = top_strengths.join(", ");
        recommendations.push(rec(
            "Strengths",
            format!(
                "Continue maintaining your positive habits in: {names}. These factors are already significantly reducing your biological age."
            ),
            Priority::Medium,
            EvidenceRating::Personalized,
            TimeToEffect::Ongoing,
        ));
    }

    recommendations
}

fn age_bracket(chronological_age: i32) -> Option<Recommendation> {
    if chronological_age < 30 {
        Some(rec(
            "Age-Specific Strategy",
            "At your age, focus on prevention and establishing healthy habits. The habits formed now will compound over decades, making this a critical window for longevity planning.",
            Priority::Medium,
            EvidenceRating::Moderate,
            TimeToEffect::LongTerm,
        ))
    } else if chronological_age >= 60 {
        Some(rec(
            "Age-Specific Strategy",
            "At your age, prioritize maintaining muscle mass, cognitive function, and social connections. These factors become increasingly important for healthy aging after 60.",
            Priority::Medium,
            EvidenceRating::Strong,
            TimeToEffect::MediumTerm,
        ))
    } else {
        None
    }
}

pub(crate) fn rec(
    category: &'static str,
    text: impl Into<String>,
    priority: Priority,
    evidence_rating: EvidenceRating,
    time_to_effect: TimeToEffect,
) -> Recommendation {
    Recommendation {
        category,
        text: text.into(),
        priority,
        evidence_rating,
        time_to_effect,
    }
}
