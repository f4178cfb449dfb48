// Monitor domain models for the UptimeRobot data pipeline
use serde::{Deserialize, Deserializer, Serialize};

/// UptimeRobot monitor status discriminators.
pub const STATUS_PAUSED: i64 = 0;
pub const STATUS_UP: i64 = 2;
pub const STATUS_DOWN: i64 = 9;

/// Log entries of this type record a detected-down interval.
pub const DOWNTIME_LOG_TYPE: i64 = 1;

pub const HOURS_IN_DAY: usize = 24;
pub const UPTIME_RANGE_DAYS: usize = 30;

/// Anomaly ceiling for response-time samples, in milliseconds (inclusive).
pub const MAX_SAMPLE_MILLIS: f64 = 60_000.0;

/// One monitor record as returned by the upstream `getMonitors` call.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawMonitor {
    pub id: u64,
    pub friendly_name: String,
    pub status: i64,
    pub create_datetime: i64,
    // Upstream sometimes sends this as a numeric string rather than a number
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_response_time: Option<f64>,
    #[serde(default)]
    pub response_times: Vec<ResponseTimeSample>,
    #[serde(default)]
    pub logs: Vec<MonitorLog>,
    #[serde(default)]
    pub custom_uptime_ranges: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResponseTimeSample {
    pub datetime: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MonitorLog {
    #[serde(rename = "type")]
    pub log_type: i64,
    pub datetime: i64,
    #[serde(default)]
    pub duration: Option<i64>,
}

/// A downtime interval kept for display, trimmed to the trailing 30 days.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DowntimeLog {
    pub datetime: i64,
    pub duration: u64,
}

/// Derived statistics for one monitor, rebuilt from scratch on every fetch cycle.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonitorStats {
    /// Rounded mean response time over the trailing 24 hours, in milliseconds.
    pub avg_response_time: Option<u64>,
    /// Hourly buckets, index 0 = the current hour going backward.
    pub daily_response_times: [Option<u64>; HOURS_IN_DAY],
    /// Mean of the valid daily uptime percentages; 0 when none are valid.
    pub uptime: f64,
    /// Per-day uptime in chronological order, `None` where upstream had no data.
    pub daily_uptimes: Vec<Option<f64>>,
    pub downtime_logs: Vec<DowntimeLog>,
    /// Total downtime over the trailing 30 days, in seconds.
    pub total_downtime: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProcessedMonitor {
    pub id: u64,
    pub friendly_name: String,
    pub status: i64,
    pub create_datetime: i64,
    pub stats: MonitorStats,
}

impl ProcessedMonitor {
    pub fn is_paused(&self) -> bool {
        self.status == STATUS_PAUSED
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }))
}
