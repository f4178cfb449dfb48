// Dashboard domain model
use crate::domain::chart::{ResponseTimeSeries, StatusTimeline};
use crate::domain::monitor::ProcessedMonitor;
use serde::Serialize;

/// Everything the UI needs to render one monitor widget.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorDashboard {
    pub monitor: ProcessedMonitor,
    pub status_timeline: StatusTimeline,
    pub response_times: ResponseTimeSeries,
}
