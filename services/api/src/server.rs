use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicantStore};
use crate::routes::with_recruitment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recruit::config::AppConfig;
use recruit::error::AppError;
use recruit::recruitment::RecruitmentService;
use recruit::telemetry;
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

    // The store handle is built here and passed in explicitly; it lives for
    // the life of the process and is dropped on shutdown.
    let store = Arc::new(InMemoryApplicantStore::default());
    let service = Arc::new(RecruitmentService::new(store));

    let app = with_recruitment_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recruitment portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
