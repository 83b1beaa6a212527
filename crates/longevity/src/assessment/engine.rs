use super::answers::AnswerSet;
use super::catalog::{catalog_for, ScoringProfile, DEFAULT_CONFIDENCE};
use super::domain::{
    AssessmentOutcome, CategoryScore, Factor, Intervention, ModelVersion, TrajectoryProjection,
};
use std::collections::BTreeMap;

/// Deterministic scoring engine. The same answers always produce the same
/// outcome for a given model version.
pub struct AssessmentEngine {
    profile: ScoringProfile,
}

impl AssessmentEngine {
    pub const fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    pub const fn for_model(model: ModelVersion) -> Self {
        Self::new(ScoringProfile::for_model(model))
    }

    pub fn profile(&self) -> ScoringProfile {
        self.profile
    }

    pub fn model(&self) -> ModelVersion {
        self.profile.model()
    }

    /// Scores a set of answers into a full outcome.
    ///
    /// Category weights act as relative emphasis: each category contributes
    /// its factor impact sum scaled by weight times the number of scored
    /// categories, so with uniform weights the adjustment equals the plain
    /// sum of impacts. Percentage scores are purely presentational and never
    /// feed the age estimate.
    pub fn evaluate(&self, answers: &AnswerSet) -> AssessmentOutcome {
        let chronological_age = answers.parsed_age();
        let evaluations = catalog_for(self.profile.model()).evaluate(answers);

        let category_count = self.profile.categories().len() as f64;
        let mut total_adjustment = 0.0;
        let mut factors = Vec::new();
        let mut category_scores = BTreeMap::new();

        for (category, evaluation) in evaluations {
            let impact_sum: f64 = evaluation.factors.iter().map(|factor| factor.impact).sum();
            total_adjustment += impact_sum * self.profile.weight(category) * category_count;

            let max_score = self.profile.max_score(category);
            factors.extend(evaluation.factors.iter().cloned());
            category_scores.insert(
                category,
                CategoryScore {
                    raw_score: evaluation.score,
                    max_score,
                    percentage_score: percentage(evaluation.score, max_score),
                    factors: evaluation.factors,
                },
            );
        }

        let total_adjustment = round1(total_adjustment);
        let biological_age =
            ((f64::from(chronological_age) + total_adjustment).round() as i32).max(1);
        let difference = biological_age - chronological_age;
        let (confidence_interval, lower_bound, upper_bound) =
            confidence_bounds(biological_age, &factors);

        AssessmentOutcome {
            chronological_age,
            biological_age,
            difference,
            total_adjustment,
            confidence_interval,
            lower_bound,
            upper_bound,
            factors,
            category_scores,
        }
    }

    /// Projects biological age over the coming years, with and without the
    /// given answer overrides applied.
    pub fn project(
        &self,
        answers: &AnswerSet,
        interventions: &[Intervention],
    ) -> TrajectoryProjection {
        super::trajectory::project(self, answers, interventions)
    }
}

/// Raw score rescaled onto 0..100 with 50 as the neutral midpoint.
fn percentage(raw_score: i32, max_score: u8) -> f64 {
    if max_score == 0 {
        return 50.0;
    }
    ((f64::from(raw_score) / f64::from(max_score)) * 100.0 + 50.0).clamp(0.0, 100.0)
}

/// Uncertainty band around the estimate. Low average factor confidence and
/// many scored factors both widen the band; the lower bound never drops
/// below one year.
fn confidence_bounds(biological_age: i32, factors: &[Factor]) -> (f64, i32, i32) {
    let average = if factors.is_empty() {
        DEFAULT_CONFIDENCE
    } else {
        factors.iter().map(|factor| factor.confidence).sum::<f64>() / factors.len() as f64
    };
    let interval = (1.0 - average) * (factors.len() as f64).sqrt() * 2.0;

    let age = f64::from(biological_age);
    let lower = ((age - interval).round() as i32).max(1);
    let upper = (age + interval).round() as i32;
    (interval, lower, upper)
}

/// Rounds to one decimal place, half away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
