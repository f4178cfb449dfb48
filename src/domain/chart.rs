// Chart configuration domain models
use crate::domain::monitor::UPTIME_RANGE_DAYS;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Display palette shared by the chart builders.
pub mod colors {
    pub const SUCCESS: &str = "#10b981";
    pub const WARNING: &str = "#eab308";
    pub const ERROR: &str = "#ef4444";
    pub const ORANGE: &str = "#ff7a45";
    pub const GRAY: &str = "rgb(120, 120, 120, 0.3)";
    pub const PAUSED: &str = "#eab308";
}

/// One day on the status timeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusSlot {
    pub date: NaiveDate,
    pub value: Option<f64>,
    pub color: &'static str,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusTimeline {
    pub slots: Vec<StatusSlot>,
}

/// Hourly response-time line series, oldest hour first, current hour last.
/// `None` points are rendered as gaps, never as zero.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResponseTimeSeries {
    pub labels: Vec<String>,
    pub points: Vec<Option<u64>>,
}

/// The 30-day window the status timeline is drawn over.
#[derive(Debug, Clone)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub dates: Vec<NaiveDate>,
}

impl DateRange {
    /// The 30 days ending today, oldest first.
    pub fn trailing_30_days(now: DateTime<Utc>) -> Self {
        let first_day = now.date_naive() - Days::new(UPTIME_RANGE_DAYS as u64 - 1);
        let dates = (0..UPTIME_RANGE_DAYS as u64)
            .map(|offset| first_day + Days::new(offset))
            .collect();
        Self {
            start: first_day.and_time(NaiveTime::MIN).and_utc(),
            dates,
        }
    }
}
