// Repository trait for the upstream monitor API
use crate::domain::monitor::RawMonitor;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Request body for the upstream `getMonitors` call, built once per fetch
/// cycle by the dashboard service.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonitorRequest {
    pub api_key: String,
    pub format: &'static str,
    pub response_times: u8,
    pub logs: u8,
    /// Dash-joined day windows, today first (see `time_range`).
    pub custom_uptime_ranges: String,
    pub response_times_start_date: i64,
    pub response_times_end_date: i64,
}

/// Failure taxonomy for one fetch cycle. Timeouts are distinct from plain
/// transport failures so callers can tell "slow" from "rejected".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),
    #[error("upstream rejected the request: {0}")]
    Upstream(String),
    #[error("could not decode monitor payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait MonitorRepository: Send + Sync {
    /// Issue the upstream call and return the raw monitor records.
    /// One logical attempt; retries are the caller's concern.
    async fn get_monitors(&self, request: &MonitorRequest) -> Result<Vec<RawMonitor>, FetchError>;
}
