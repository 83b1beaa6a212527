use super::common::*;
use crate::assessment::domain::Intervention;
use crate::assessment::TIME_HORIZON_YEARS;

fn exercise_intervention(value: &str) -> Vec<Intervention> {
    vec![Intervention {
        question: "exercise".to_string(),
        value: value.into(),
    }]
}

#[test]
fn projection_covers_the_horizon_plus_year_zero() {
    let projection = baseline_engine().project(&baseline_answers(), &[]);

    assert_eq!(projection.time_horizon, TIME_HORIZON_YEARS);
    assert_eq!(
        projection.trajectories.no_change.len(),
        TIME_HORIZON_YEARS as usize + 1
    );
    assert!(projection.trajectories.with_interventions.is_empty());

    for (index, point) in projection.trajectories.no_change.iter().enumerate() {
        assert_eq!(point.year, index as u32);
        assert_eq!(point.chronological_age, 30 + index as i32);
    }
}

#[test]
fn biological_age_drifts_upward_without_change() {
    let projection = baseline_engine().project(&baseline_answers(), &[]);
    let curve = &projection.trajectories.no_change;

    assert!((curve[0].biological_age - 26.0).abs() < 1e-9);
    assert!((curve[1].biological_age - 26.9).abs() < 1e-9);
    assert!((curve[10].biological_age - 35.0).abs() < 1e-9);
}

#[test]
fn adverse_profiles_drift_faster() {
    let projection = baseline_engine().project(&adverse_answers(), &[]);
    let curve = &projection.trajectories.no_change;

    assert!((curve[0].biological_age - 56.0).abs() < 1e-9);
    assert!((curve[1].biological_age - 57.1).abs() < 1e-9);
}

#[test]
fn interventions_ramp_in_over_three_years() {
    let projection = baseline_engine().project(&baseline_answers(), &exercise_intervention("daily"));
    let no_change = &projection.trajectories.no_change;
    let with = &projection.trajectories.with_interventions;

    assert_eq!(with.len(), no_change.len());
    assert!((with[0].biological_age - 26.0).abs() < 1e-9);
    assert!((with[1].biological_age - 25.6).abs() < 1e-9);
    assert!((with[2].biological_age - 25.1).abs() < 1e-9);

    // From year three onwards the full improvement applies.
    for year in 3..=TIME_HORIZON_YEARS as usize {
        let gap = no_change[year].biological_age - with[year].biological_age;
        assert!((gap - 4.0).abs() < 1e-9, "year {year} gap was {gap}");
    }
}

#[test]
fn harmful_interventions_lift_the_curve() {
    let projection = baseline_engine().project(&baseline_answers(), &exercise_intervention("none"));
    let no_change = &projection.trajectories.no_change;
    let with = &projection.trajectories.with_interventions;

    assert!(with[10].biological_age > no_change[10].biological_age);
    assert!((with[3].biological_age - (no_change[3].biological_age + 3.0)).abs() < 1e-9);
}

#[test]
fn projection_embeds_the_unmodified_outcome() {
    let answers = baseline_answers();
    let engine = baseline_engine();
    let projection = engine.project(&answers, &exercise_intervention("daily"));

    assert_eq!(projection.current, engine.evaluate(&answers));
}
