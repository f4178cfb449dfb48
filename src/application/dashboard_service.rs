// Dashboard service - one fetch cycle: request, validate, sort, derive.
use crate::application::chart_builder::{response_time_series, status_timeline};
use crate::application::monitor_repository::{FetchError, MonitorRepository, MonitorRequest};
use crate::application::processor::process_monitor;
use crate::application::time_range::{generate_time_ranges, twenty_four_hours_ago};
use crate::domain::chart::DateRange;
use crate::domain::dashboard::MonitorDashboard;
use crate::domain::monitor::ProcessedMonitor;
use chrono::{Local, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn MonitorRepository>,
    api_key: String,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn MonitorRepository>, api_key: String) -> Self {
        Self {
            repository,
            api_key,
        }
    }

    /// Fetch the raw monitor list and derive per-monitor statistics.
    /// Monitors come back newest first. Each call is one independent cycle;
    /// overlapping calls are not deduplicated.
    pub async fn fetch_monitors(&self) -> Result<Vec<ProcessedMonitor>, FetchError> {
        let now = Utc::now();
        let request = MonitorRequest {
            api_key: self.api_key.clone(),
            format: "json",
            response_times: 1,
            logs: 1,
            custom_uptime_ranges: generate_time_ranges(Local::now()),
            response_times_start_date: twenty_four_hours_ago(now),
            response_times_end_date: now.timestamp(),
        };

        let mut monitors = self.repository.get_monitors(&request).await?;
        monitors.sort_by(|a, b| b.create_datetime.cmp(&a.create_datetime));

        tracing::debug!("processing {} monitors", monitors.len());
        Ok(monitors
            .into_iter()
            .map(|monitor| process_monitor(monitor, now))
            .collect())
    }

    /// Full dashboard payload: processed monitors plus their chart configs.
    pub async fn dashboard(&self) -> Result<Vec<MonitorDashboard>, FetchError> {
        let monitors = self.fetch_monitors().await?;
        let now = Utc::now();
        let range = DateRange::trailing_30_days(now);

        Ok(monitors
            .into_iter()
            .map(|monitor| MonitorDashboard {
                status_timeline: status_timeline(&monitor, &range, now),
                response_times: response_time_series(&monitor, Local::now()),
                monitor,
            })
            .collect())
    }
}
