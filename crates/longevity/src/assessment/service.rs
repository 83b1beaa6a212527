use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::answers::AnswerSet;
use super::catalog::ScoringProfile;
use super::domain::{
    AssessmentId, Intervention, ModelVersion, Recommendation, TrajectoryProjection,
};
use super::engine::AssessmentEngine;
use super::history::{
    AssessmentRecord, HistoryEntryView, HistoryError, HistoryStore, HISTORY_CAPACITY,
};
use super::intake::{IntakeGuard, IntakeRejection};
use super::recommend::generate_recommendations;

/// Service composing the intake guard, scoring engine, and history store.
pub struct AssessmentService<H> {
    guard: IntakeGuard,
    engine: Arc<AssessmentEngine>,
    history: Arc<H>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<H> AssessmentService<H>
where
    H: HistoryStore + 'static,
{
    pub fn new(history: Arc<H>, profile: ScoringProfile) -> Self {
        Self {
            guard: IntakeGuard::new(),
            engine: Arc::new(AssessmentEngine::new(profile)),
            history,
        }
    }

    pub fn model(&self) -> ModelVersion {
        self.engine.model()
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    /// Scores a submission and appends the record to history.
    pub fn assess(&self, answers: AnswerSet) -> Result<AssessmentRecord, AssessmentServiceError> {
        self.guard.check(&answers)?;
        let outcome = self.engine.evaluate(&answers);
        tracing::info!(
            model = self.engine.model().label(),
            chronological_age = outcome.chronological_age,
            biological_age = outcome.biological_age,
            "submission scored"
        );
        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            recorded_at: Utc::now(),
            answers,
            outcome,
        };
        self.history.push(record.clone())?;
        Ok(record)
    }

    /// Projects the submission over the coming years. Nothing is recorded.
    pub fn project(
        &self,
        answers: &AnswerSet,
        interventions: &[Intervention],
    ) -> Result<TrajectoryProjection, AssessmentServiceError> {
        self.guard.check(answers)?;
        Ok(self.engine.project(answers, interventions))
    }

    /// Builds the ranked advice list. Nothing is recorded.
    pub fn recommendations(
        &self,
        answers: &AnswerSet,
    ) -> Result<Vec<Recommendation>, AssessmentServiceError> {
        self.guard.check(answers)?;
        let outcome = self.engine.evaluate(answers);
        Ok(generate_recommendations(answers, &outcome))
    }

    /// Recent assessments, newest first.
    pub fn recent_assessments(&self) -> Result<Vec<HistoryEntryView>, AssessmentServiceError> {
        let records = self.history.recent(HISTORY_CAPACITY)?;
        Ok(records.iter().map(AssessmentRecord::summary_view).collect())
    }

    pub fn clear_history(&self) -> Result<(), AssessmentServiceError> {
        self.history.clear()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeRejection),
    #[error(transparent)]
    History(#[from] HistoryError),
}
