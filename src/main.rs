// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::uptime_robot::UptimeRobotRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard, health_check, proxy_status};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings()?;

    // Repository (infrastructure layer)
    let repository = Arc::new(UptimeRobotRepository::new(
        settings.api_url.clone(),
        Duration::from_secs(settings.request_timeout_seconds),
    ));

    // Service (application layer)
    let dashboard_service = DashboardService::new(repository, settings.api_key.clone());

    let state = Arc::new(AppState {
        dashboard_service,
        proxy_client: reqwest::Client::new(),
        upstream_url: settings.api_url.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Router (presentation layer). Non-POST requests to /api/status get a 405
    // from the method router; OPTIONS preflight is answered by the CORS layer.
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(dashboard))
        .route("/api/status", post(proxy_status))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    tracing::info!("starting uptime-telemetry service on {addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
