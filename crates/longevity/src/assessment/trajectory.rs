use super::answers::AnswerSet;
use super::domain::{Intervention, TrajectoryPoint, TrajectoryProjection, TrajectorySeries};
use super::engine::{round1, AssessmentEngine};

/// Years covered by a projection, in addition to year zero.
pub const TIME_HORIZON_YEARS: u32 = 10;

/// Biological age drift per year without behaviour change.
const BASELINE_YEARLY_INCREASE: f64 = 0.9;
/// Extra drift applied when the current adjustment is already adverse.
const ADVERSE_SURCHARGE: f64 = 0.2;
/// Years until an intervention reaches its full effect.
const INTERVENTION_RAMP_YEARS: f64 = 3.0;

pub(crate) fn project(
    engine: &AssessmentEngine,
    answers: &AnswerSet,
    interventions: &[Intervention],
) -> TrajectoryProjection {
    let current = engine.evaluate(answers);
    let yearly_increase = if current.total_adjustment > 0.0 {
        BASELINE_YEARLY_INCREASE + ADVERSE_SURCHARGE
    } else {
        BASELINE_YEARLY_INCREASE
    };

    // Improvement is the immediate drop in biological age once all overrides
    // are in place. It can be negative when the overrides make things worse.
    let improvement = if interventions.is_empty() {
        None
    } else {
        let modified = apply_interventions(answers, interventions);
        let outcome = engine.evaluate(&modified);
        Some(f64::from(current.biological_age - outcome.biological_age))
    };

    let current_bio = f64::from(current.biological_age);
    let mut no_change = Vec::new();
    let mut with_interventions = Vec::new();

    for year in 0..=TIME_HORIZON_YEARS {
        let drift = yearly_increase * f64::from(year);
        let chronological_age = current.chronological_age + year as i32;
        no_change.push(TrajectoryPoint {
            year,
            chronological_age,
            biological_age: round1(current_bio + drift),
        });

        if let Some(improvement) = improvement {
            let effect = improvement * (f64::from(year) / INTERVENTION_RAMP_YEARS).min(1.0);
            with_interventions.push(TrajectoryPoint {
                year,
                chronological_age,
                biological_age: round1(current_bio + drift - effect),
            });
        }
    }

    TrajectoryProjection {
        current,
        trajectories: TrajectorySeries {
            no_change,
            with_interventions,
        },
        time_horizon: TIME_HORIZON_YEARS,
    }
}

fn apply_interventions(answers: &AnswerSet, interventions: &[Intervention]) -> AnswerSet {
    let mut modified = answers.clone();
    for intervention in interventions {
        modified.insert(intervention.question.clone(), intervention.value.clone());
    }
    modified
}
