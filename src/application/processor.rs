// Monitor statistics derivation - pure transformations over one raw record.
// `now` is injected everywhere so tests can pin the clock.
use crate::application::time_range::{thirty_days_ago, twenty_four_hours_ago};
use crate::domain::monitor::{
    DowntimeLog, MonitorLog, MonitorStats, ProcessedMonitor, RawMonitor, DOWNTIME_LOG_TYPE,
    HOURS_IN_DAY, MAX_SAMPLE_MILLIS,
};
use chrono::{DateTime, Utc};

const SECONDS_PER_HOUR: i64 = 60 * 60;

/// A response-time sample counts only when strictly positive and within the
/// anomaly window. The 60000 ms ceiling is inclusive.
fn is_valid_sample(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= MAX_SAMPLE_MILLIS
}

/// An uptime percentage counts toward the mean only when present and > 0.
fn is_valid_uptime(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn rounded_mean(values: &[f64]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some(mean.round() as u64)
}

/// Mean response time over the trailing 24 hours, rounded to the nearest
/// millisecond. Prefers granular samples; falls back to the coarse
/// upstream-provided average when no usable sample exists.
pub fn average_response_time(monitor: &RawMonitor, now: DateTime<Utc>) -> Option<u64> {
    let cutoff = twenty_four_hours_ago(now);
    let recent: Vec<f64> = monitor
        .response_times
        .iter()
        .filter(|sample| sample.datetime >= cutoff && is_valid_sample(sample.value))
        .map(|sample| sample.value)
        .collect();

    if let Some(mean) = rounded_mean(&recent) {
        return Some(mean);
    }

    monitor
        .average_response_time
        .filter(|value| value.is_finite() && *value > 0.0)
        .map(|value| value.round() as u64)
}

/// Downtime entries within the trailing 30 days, newest first, plus the
/// summed duration in seconds. A missing duration counts as zero.
pub fn downtime(logs: &[MonitorLog], now: DateTime<Utc>) -> (Vec<DowntimeLog>, u64) {
    let cutoff = thirty_days_ago(now);
    let mut recent: Vec<DowntimeLog> = logs
        .iter()
        .filter(|log| log.log_type == DOWNTIME_LOG_TYPE && log.datetime >= cutoff)
        .map(|log| DowntimeLog {
            datetime: log.datetime,
            duration: log.duration.unwrap_or(0).max(0) as u64,
        })
        .collect();
    recent.sort_by(|a, b| b.datetime.cmp(&a.datetime));

    let total = recent.iter().map(|log| log.duration).sum();
    (recent, total)
}

/// Parses the dash-joined uptime string (newest day first) into the
/// chronological per-day sequence plus the mean over valid values.
/// Unparseable segments stay in the sequence as `None`; they are only
/// excluded from the mean.
pub fn uptime_series(ranges: Option<&str>) -> (Vec<Option<f64>>, f64) {
    let daily: Vec<Option<f64>> = match ranges {
        Some(raw) if !raw.is_empty() => raw.split('-').map(parse_segment).rev().collect(),
        _ => Vec::new(),
    };

    let valid: Vec<f64> = daily
        .iter()
        .flatten()
        .copied()
        .filter(|value| is_valid_uptime(*value))
        .collect();
    let mean = if valid.is_empty() {
        0.0
    } else {
        valid.iter().sum::<f64>() / valid.len() as f64
    };

    (daily, mean)
}

fn parse_segment(segment: &str) -> Option<f64> {
    segment.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Buckets valid samples into the trailing 24 hours (index 0 = current hour)
/// and takes the rounded mean per bucket. Samples older than 24 hours or
/// timestamped in the future are dropped silently.
pub fn hourly_response_times(
    monitor: &RawMonitor,
    now: DateTime<Utc>,
) -> [Option<u64>; HOURS_IN_DAY] {
    let now_ts = now.timestamp();
    let mut sums = [0.0f64; HOURS_IN_DAY];
    let mut counts = [0u32; HOURS_IN_DAY];

    for sample in &monitor.response_times {
        if !is_valid_sample(sample.value) {
            continue;
        }
        let age = now_ts - sample.datetime;
        if age < 0 {
            continue;
        }
        let index = (age / SECONDS_PER_HOUR) as usize;
        if index < HOURS_IN_DAY {
            sums[index] += sample.value;
            counts[index] += 1;
        }
    }

    std::array::from_fn(|i| {
        (counts[i] > 0).then(|| (sums[i] / counts[i] as f64).round() as u64)
    })
}

/// One raw monitor in, the same monitor with its derived stats out.
pub fn process_monitor(monitor: RawMonitor, now: DateTime<Utc>) -> ProcessedMonitor {
    let avg_response_time = average_response_time(&monitor, now);
    let daily_response_times = hourly_response_times(&monitor, now);
    let (downtime_logs, total_downtime) = downtime(&monitor.logs, now);
    let (daily_uptimes, uptime) = uptime_series(monitor.custom_uptime_ranges.as_deref());

    ProcessedMonitor {
        id: monitor.id,
        friendly_name: monitor.friendly_name,
        status: monitor.status,
        create_datetime: monitor.create_datetime,
        stats: MonitorStats {
            avg_response_time,
            daily_response_times,
            uptime,
            daily_uptimes,
            downtime_logs,
            total_downtime,
        },
    }
}
