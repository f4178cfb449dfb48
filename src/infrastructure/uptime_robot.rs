// UptimeRobot repository implementation
use crate::application::monitor_repository::{FetchError, MonitorRepository, MonitorRequest};
use crate::domain::monitor::RawMonitor;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const STAT_OK: &str = "ok";

#[derive(Debug, Clone)]
pub struct UptimeRobotRepository {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct MonitorsEnvelope {
    stat: String,
    #[serde(default)]
    monitors: Vec<RawMonitor>,
    #[serde(default)]
    message: Option<String>,
}

impl UptimeRobotRepository {
    pub fn new(api_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            timeout,
        }
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout.as_secs())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl MonitorRepository for UptimeRobotRepository {
    async fn get_monitors(&self, request: &MonitorRequest) -> Result<Vec<RawMonitor>, FetchError> {
        // The deadline covers the whole exchange including body read; reqwest
        // aborts the in-flight request when it elapses.
        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("upstream returned {status}: {body}");
            return Err(FetchError::Transport(format!("status {status}")));
        }

        let envelope: MonitorsEnvelope = response.json().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout.as_secs())
            } else {
                FetchError::Decode(e.to_string())
            }
        })?;

        if envelope.stat != STAT_OK {
            return Err(FetchError::Upstream(
                envelope
                    .message
                    .unwrap_or_else(|| "unknown upstream error".to_string()),
            ));
        }

        Ok(envelope.monitors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let envelope: MonitorsEnvelope = serde_json::from_str(
            r#"{
                "stat": "ok",
                "monitors": [
                    {"id": 1, "friendly_name": "api", "status": 2, "create_datetime": 1700000000}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.stat, STAT_OK);
        assert_eq!(envelope.monitors.len(), 1);
        assert_eq!(envelope.monitors[0].friendly_name, "api");
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let envelope: MonitorsEnvelope =
            serde_json::from_str(r#"{"stat": "fail", "message": "api_key is wrong"}"#).unwrap();

        assert_ne!(envelope.stat, STAT_OK);
        assert_eq!(envelope.message.as_deref(), Some("api_key is wrong"));
        assert!(envelope.monitors.is_empty());
    }
}
