// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    /// Client and target for the CORS proxy passthrough.
    pub proxy_client: reqwest::Client,
    pub upstream_url: String,
}
