use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryQuizResultRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use brandscaling::assessment::DnaAssessmentService;
use brandscaling::config::AppConfig;
use brandscaling::error::AppError;
use brandscaling::telemetry;
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

    let repository = Arc::new(InMemoryQuizResultRepository::default());
    let assessment_service = Arc::new(DnaAssessmentService::new(
        repository,
        config.retake.clone(),
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        cooldown_days = config.retake.cooldown_days,
        exempt_students = config.retake.exempt_students.len(),
        "entrepreneurial DNA service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
