// Chart config builders - pure functions over already-processed monitors.
// These never fail; missing or invalid data becomes a "no data" display state.
use crate::domain::chart::{colors, DateRange, ResponseTimeSeries, StatusSlot, StatusTimeline};
use crate::domain::monitor::{ProcessedMonitor, HOURS_IN_DAY, STATUS_PAUSED};
use chrono::{DateTime, Duration, TimeZone, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Threshold rule for one timeline slot, first match wins.
pub fn slot_color(value: Option<f64>, before_creation: bool, status: i64) -> &'static str {
    if before_creation {
        return colors::GRAY;
    }
    if status == STATUS_PAUSED {
        return colors::PAUSED;
    }
    let value = match value {
        Some(v) if !v.is_nan() => v,
        _ => return colors::ERROR,
    };
    if value == 0.0 {
        return colors::ERROR;
    }
    match value {
        v if v >= 99.9 => colors::SUCCESS,
        v if v >= 90.0 => colors::WARNING,
        _ => colors::ORANGE,
    }
}

/// 30-slot status timeline. Slots predating the monitor's creation render
/// as "no data" rather than "down".
pub fn status_timeline(
    monitor: &ProcessedMonitor,
    range: &DateRange,
    now: DateTime<Utc>,
) -> StatusTimeline {
    // A creation date in the future clamps to now.
    let create_ts = monitor.create_datetime.min(now.timestamp());
    let days_since_start =
        ((create_ts - range.start.timestamp()) / SECONDS_PER_DAY).max(0) as usize;

    let slots = range
        .dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let before_creation = i < days_since_start;
            let value = if before_creation {
                None
            } else {
                monitor.stats.daily_uptimes.get(i).copied().flatten()
            };

            let tooltip = if before_creation {
                "no data".to_string()
            } else if monitor.is_paused() {
                "paused".to_string()
            } else {
                match value {
                    Some(v) => format!("uptime: {v:.2}%"),
                    None => "no data".to_string(),
                }
            };

            StatusSlot {
                date: *date,
                value,
                color: slot_color(value, before_creation, monitor.status),
                tooltip,
            }
        })
        .collect();

    StatusTimeline { slots }
}

/// Hourly response-time line series: 24 labels, 23 hours ago first, the
/// current hour last, with empty buckets preserved as gaps. Labels render in
/// the caller's timezone, the same zone the day windows are requested in.
pub fn response_time_series<Tz: TimeZone>(
    monitor: &ProcessedMonitor,
    now: DateTime<Tz>,
) -> ResponseTimeSeries
where
    Tz::Offset: std::fmt::Display,
{
    let labels = (0..HOURS_IN_DAY as i64)
        .rev()
        .map(|hours_back| {
            (now.clone() - Duration::hours(hours_back))
                .format("%H:%M")
                .to_string()
        })
        .collect();
    let points = monitor
        .stats
        .daily_response_times
        .iter()
        .rev()
        .copied()
        .collect();

    ResponseTimeSeries { labels, points }
}
