use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use longevity::cohort::{CohortImporter, CohortReport};
use longevity::error::AppError;
use longevity::{assessment_router, AssessmentService, HistoryStore};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

/// Request body for batch scoring: the raw CSV export inlined as text.
#[derive(Debug, Deserialize)]
pub(crate) struct CohortReportRequest {
    pub(crate) csv: String,
}

pub(crate) fn with_assessment_routes<H>(service: Arc<AssessmentService<H>>) -> axum::Router
where
    H: HistoryStore + 'static,
{
    assessment_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .merge(
            axum::Router::new()
                .route(
                    "/api/v1/cohorts/report",
                    axum::routing::post(cohort_report_endpoint::<H>),
                )
                .with_state(service),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Scores every row of an inlined survey export. Malformed CSV maps to 400;
/// rows themselves never fail, the engine scores whatever each one carries.
pub(crate) async fn cohort_report_endpoint<H>(
    State(service): State<Arc<AssessmentService<H>>>,
    Json(payload): Json<CohortReportRequest>,
) -> Result<Json<CohortReport>, AppError>
where
    H: HistoryStore + 'static,
{
    let reader = Cursor::new(payload.csv.into_bytes());
    let members = CohortImporter::from_reader(reader)?;
    let report = CohortReport::build(service.engine(), members);
    Ok(Json(report))
}
