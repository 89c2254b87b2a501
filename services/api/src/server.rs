use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionRepository};
use crate::routes::with_guidance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use careerbot::config::AppConfig;
use careerbot::error::AppError;
use careerbot::telemetry;
use careerbot::workflows::guidance::{
    gateway_from_config, AdvisorGateway, FsReportStore, GuidanceService,
};
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

    let reports = Arc::new(FsReportStore::new(
        config.reports.directory.clone(),
        &config.reports.url_prefix,
    ));
    let advisor: Arc<dyn AdvisorGateway> = Arc::from(gateway_from_config(&config.advisor));
    let guidance_service = Arc::new(GuidanceService::new(
        Arc::new(InMemorySessionRepository::default()),
        advisor,
        reports,
        config.sessions.idle_ttl,
    ));

    let app = with_guidance_routes(guidance_service, &config.reports.url_prefix)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        advisor = config.advisor.enabled,
        reports = %config.reports.directory.display(),
        "career guidance bot ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
