use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::AnswerSet;
use crate::assessment::domain::ModelVersion;
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::history::{
    AssessmentRecord, HistoryError, HistoryStore, HISTORY_CAPACITY,
};
use crate::assessment::intake::IntakeGuard;
use crate::assessment::{assessment_router, AssessmentService, ScoringProfile};

/// Complete submission that passes intake and lands below chronological age.
pub(super) fn baseline_answers() -> AnswerSet {
    AnswerSet::new()
        .with("age", "30")
        .with("gender", "male")
        .with("diet-quality", "average")
        .with("exercise", "occasional")
        .with("sleep", "optimal")
        .with("smoker", "no")
        .with("outdoor-time", "moderate")
}

/// Complete submission with the heaviest single-question risks.
pub(super) fn adverse_answers() -> AnswerSet {
    AnswerSet::new()
        .with("age", "30")
        .with("gender", "male")
        .with("diet-quality", "poor")
        .with("exercise", "none")
        .with("sleep", "less")
        .with("smoker", "yes")
        .with("outdoor-time", "moderate")
}

/// Complete submission where every answered question is protective.
pub(super) fn optimal_answers(age: &str) -> AnswerSet {
    AnswerSet::new()
        .with("age", age)
        .with("gender", "female")
        .with("diet-quality", "excellent")
        .with("exercise", "daily")
        .with("sleep", "optimal")
        .with("smoker", "no")
        .with("outdoor-time", "extensive")
}

pub(super) fn baseline_engine() -> AssessmentEngine {
    AssessmentEngine::for_model(ModelVersion::Baseline)
}

pub(super) fn extended_engine() -> AssessmentEngine {
    AssessmentEngine::for_model(ModelVersion::Extended)
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::new()
}

pub(super) fn build_service() -> (AssessmentService<MemoryHistory>, Arc<MemoryHistory>) {
    let history = Arc::new(MemoryHistory::default());
    let service = AssessmentService::new(history.clone(), ScoringProfile::baseline());
    (service, history)
}

#[derive(Default)]
pub(super) struct MemoryHistory {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl HistoryStore for MemoryHistory {
    fn push(&self, record: AssessmentRecord) -> Result<(), HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        guard.insert(0, record);
        guard.truncate(HISTORY_CAPACITY);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.iter().take(limit).cloned().collect())
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.records.lock().expect("history mutex poisoned").clear();
        Ok(())
    }
}

pub(super) struct UnavailableHistory;

impl HistoryStore for UnavailableHistory {
    fn push(&self, _record: AssessmentRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }

    fn clear(&self) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("history offline".to_string()))
    }
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryHistory>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
