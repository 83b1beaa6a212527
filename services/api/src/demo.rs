use clap::Args;
use longevity::cohort::{CohortImporter, CohortReport};
use longevity::error::AppError;
use longevity::{
    generate_recommendations, AnswerSet, AssessmentEngine, AssessmentOutcome, EvidenceRating,
    IntakeGuard, Intervention, ModelVersion, Recommendation, ScoringProfile, TimeToEffect,
    TrajectoryProjection,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Answers JSON file: an object mapping question keys to values
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Scoring model version (baseline or extended)
    #[arg(long, default_value = "extended", value_parser = crate::infra::parse_model)]
    pub(crate) model: ModelVersion,
    /// Include the 10-year trajectory projection
    #[arg(long)]
    pub(crate) trajectory: bool,
    /// Interventions JSON file: a list of {"question": ..., "value": ...}
    /// overrides applied to the trajectory's what-if branch
    #[arg(long)]
    pub(crate) interventions: Option<PathBuf>,
    /// List every scored factor with its year impact
    #[arg(long)]
    pub(crate) list_factors: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CohortArgs {
    /// Cohort CSV export, one respondent per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Scoring model version (baseline or extended)
    #[arg(long, default_value = "extended", value_parser = crate::infra::parse_model)]
    pub(crate) model: ModelVersion,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Scoring model version (baseline or extended)
    #[arg(long, default_value = "extended", value_parser = crate::infra::parse_model)]
    pub(crate) model: ModelVersion,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        answers,
        model,
        trajectory,
        interventions,
        list_factors,
    } = args;

    let raw = std::fs::read(&answers)?;
    let answers: AnswerSet = serde_json::from_slice(&raw)?;

    if let Err(rejection) = IntakeGuard::new().check(&answers) {
        println!("Submission rejected by intake checks:");
        for violation in &rejection.violations {
            println!("  {}: {}", violation.question, violation.message);
        }
        return Ok(());
    }

    let engine = AssessmentEngine::for_model(model);
    let outcome = engine.evaluate(&answers);
    println!("Assessment report ({} model)", model.label());
    render_outcome(&outcome);

    if list_factors {
        render_factors(&outcome);
    }

    if trajectory || interventions.is_some() {
        let overrides = match interventions {
            Some(path) => {
                let raw = std::fs::read(&path)?;
                serde_json::from_slice::<Vec<Intervention>>(&raw)?
            }
            None => Vec::new(),
        };
        let projection = engine.project(&answers, &overrides);
        render_trajectory(&projection);
    }

    Ok(())
}

pub(crate) fn run_cohort_report(args: CohortArgs) -> Result<(), AppError> {
    let members = CohortImporter::from_path(&args.csv)?;
    let engine = AssessmentEngine::for_model(args.model);
    let report = CohortReport::build(&engine, members);

    println!("Cohort report ({} model)", args.model.label());
    for member in &report.members {
        println!(
            "  {}: chronological {} -> biological {} ({:+})",
            member.respondent,
            member.outcome.chronological_age,
            member.outcome.biological_age,
            member.outcome.difference,
        );
    }

    let summary = &report.summary;
    println!("Summary over {} respondent(s)", summary.respondents);
    println!(
        "  average biological age {:.1}, average difference {:+.1}",
        summary.average_biological_age, summary.average_difference
    );
    if !summary.leading_risks.is_empty() {
        println!("  leading risks: {}", summary.leading_risks.join(", "));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let model = args.model;
    let engine = AssessmentEngine::new(ScoringProfile::for_model(model));
    let answers = sample_profile();

    println!("Longevity assessment demo ({} model)", model.label());
    let outcome = engine.evaluate(&answers);
    render_outcome(&outcome);
    render_factors(&outcome);

    let recommendations = generate_recommendations(&answers, &outcome);
    render_recommendations(&recommendations);

    let interventions = vec![
        Intervention {
            question: "exercise".to_string(),
            value: "daily".into(),
        },
        Intervention {
            question: "stress".to_string(),
            value: "low".into(),
        },
    ];
    let projection = engine.project(&answers, &interventions);
    render_trajectory(&projection);

    Ok(())
}

/// Mixed profile used by the demo: solid diet and activity habits undercut
/// by stress, screen time, and a chronic condition.
fn sample_profile() -> AnswerSet {
    AnswerSet::new()
        .with("age", "48")
        .with("gender", "female")
        .with("height", "168")
        .with("weight", "74")
        .with("diet-quality", "good")
        .with("exercise", "regular")
        .with("sleep", "optimal")
        .with("sleep-quality", "good")
        .with("smoker", "no")
        .with("alcohol", "moderate")
        .with("stress", "high")
        .with("social", "moderate")
        .with("screen-time", "high")
        .with("outdoor-time", "moderate")
        .with("conditions", vec!["hypertension"])
}

fn render_outcome(outcome: &AssessmentOutcome) {
    println!(
        "  chronological age {} -> biological age {} ({:+} years, adjustment {:+.1})",
        outcome.chronological_age,
        outcome.biological_age,
        outcome.difference,
        outcome.total_adjustment,
    );
    println!(
        "  estimated range {}..{} (interval {:.1})",
        outcome.lower_bound, outcome.upper_bound, outcome.confidence_interval
    );

    println!("Category scores");
    for (category, score) in &outcome.category_scores {
        println!(
            "  {:<20} {:>5.1} ({} factor(s))",
            category.label(),
            score.percentage_score,
            score.factors.len(),
        );
    }
}

fn render_factors(outcome: &AssessmentOutcome) {
    println!("Scored factors");
    for factor in &outcome.factors {
        println!(
            "  {:+.1}y  {} [{}] - {}",
            factor.impact,
            factor.name,
            factor.category.label(),
            factor.description,
        );
    }
}

fn render_recommendations(recommendations: &[Recommendation]) {
    println!("Recommendations");
    for recommendation in recommendations {
        println!(
            "  [{}] {} ({} evidence, {})",
            recommendation.priority.label(),
            recommendation.category,
            evidence_label(recommendation.evidence_rating),
            time_label(recommendation.time_to_effect),
        );
        println!("    {}", recommendation.text);
    }
}

fn render_trajectory(projection: &TrajectoryProjection) {
    println!("Trajectory over {} years", projection.time_horizon);
    let with = &projection.trajectories.with_interventions;
    for (index, point) in projection.trajectories.no_change.iter().enumerate() {
        match with.get(index) {
            Some(improved) => println!(
                "  year {:>2}: age {} -> {:.1} without changes, {:.1} with interventions",
                point.year, point.chronological_age, point.biological_age, improved.biological_age,
            ),
            None => println!(
                "  year {:>2}: age {} -> {:.1}",
                point.year, point.chronological_age, point.biological_age,
            ),
        }
    }
}

fn evidence_label(rating: EvidenceRating) -> &'static str {
    match rating {
        EvidenceRating::Strong => "strong",
        EvidenceRating::Moderate => "moderate",
        EvidenceRating::Emerging => "emerging",
        EvidenceRating::Personalized => "personalized",
    }
}

fn time_label(time_to_effect: TimeToEffect) -> &'static str {
    match time_to_effect {
        TimeToEffect::ShortTerm => "short-term",
        TimeToEffect::MediumTerm => "medium-term",
        TimeToEffect::LongTerm => "long-term",
        TimeToEffect::Varies => "varies",
        TimeToEffect::Ongoing => "ongoing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profile_passes_intake_and_scores() {
        let answers = sample_profile();
        IntakeGuard::new().check(&answers).expect("profile is complete");

        let outcome = AssessmentEngine::for_model(ModelVersion::Extended).evaluate(&answers);
        assert!(outcome.biological_age >= 1);
        assert!(!outcome.factors.is_empty());

        let recommendations = generate_recommendations(&answers, &outcome);
        assert!(!recommendations.is_empty());
    }
}
