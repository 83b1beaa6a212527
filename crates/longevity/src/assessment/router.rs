use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::answers::AnswerSet;
use super::domain::Intervention;
use super::history::HistoryStore;
use super::service::{AssessmentService, AssessmentServiceError};

/// Request body for trajectory projections. Interventions default to none,
/// which yields two identical curves.
#[derive(Debug, Clone, Deserialize)]
pub struct TrajectoryRequest {
    pub answers: AnswerSet,
    #[serde(default)]
    pub interventions: Vec<Intervention>,
}

/// Router builder exposing HTTP endpoints for scoring, advice, and history.
pub fn assessment_router<H>(service: Arc<AssessmentService<H>>) -> Router
where
    H: HistoryStore + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(assess_handler::<H>))
        .route(
            "/api/v1/assessments/trajectory",
            post(trajectory_handler::<H>),
        )
        .route(
            "/api/v1/assessments/recommendations",
            post(recommendations_handler::<H>),
        )
        .route(
            "/api/v1/assessments/history",
            get(history_handler::<H>).delete(clear_history_handler::<H>),
        )
        .with_state(service)
}

pub(crate) async fn assess_handler<H>(
    State(service): State<Arc<AssessmentService<H>>>,
    axum::Json(answers): axum::Json<AnswerSet>,
) -> Response
where
    H: HistoryStore + 'static,
{
    match service.assess(answers) {
        Ok(record) => {
            let view = record.view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn trajectory_handler<H>(
    State(service): State<Arc<AssessmentService<H>>>,
    axum::Json(request): axum::Json<TrajectoryRequest>,
) -> Response
where
    H: HistoryStore + 'static,
{
    match service.project(&request.answers, &request.interventions) {
        Ok(projection) => (StatusCode::OK, axum::Json(projection)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<H>(
    State(service): State<Arc<AssessmentService<H>>>,
    axum::Json(answers): axum::Json<AnswerSet>,
) -> Response
where
    H: HistoryStore + 'static,
{
    match service.recommendations(&answers) {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<H>(
    State(service): State<Arc<AssessmentService<H>>>,
) -> Response
where
    H: HistoryStore + 'static,
{
    match service.recent_assessments() {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn clear_history_handler<H>(
    State(service): State<Arc<AssessmentService<H>>>,
) -> Response
where
    H: HistoryStore + 'static,
{
    match service.clear_history() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::Intake(rejection) => {
            let payload = json!({
                "error": rejection.to_string(),
                "violations": rejection.violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::History(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
