use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryHistoryStore};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use longevity::config::AppConfig;
use longevity::error::AppError;
use longevity::telemetry;
use longevity::{AssessmentService, ScoringProfile};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let profile = ScoringProfile::for_model(config.scoring.model);
    let history = Arc::new(InMemoryHistoryStore::default());
    let service = Arc::new(AssessmentService::new(history, profile));

    let app = with_assessment_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model = config.scoring.model.label(),
        "longevity assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
