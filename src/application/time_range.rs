// Time-range generation for the upstream custom_uptime_ranges parameter
use crate::domain::monitor::UPTIME_RANGE_DAYS;
use chrono::{DateTime, Days, Duration, NaiveDateTime, NaiveTime, TimeZone, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Builds the dash-joined `start_end` day windows the upstream API expects:
/// 30 days ending today, today first. Note this is the reverse of the
/// chronological order the processor produces for `daily_uptimes`.
pub fn generate_time_ranges<Tz: TimeZone>(today: DateTime<Tz>) -> String {
    let tz = today.timezone();
    (0..UPTIME_RANGE_DAYS as u64)
        .map(|offset| {
            let day = today.date_naive() - Days::new(offset);
            let start = day.and_time(NaiveTime::MIN);
            let end = start + Duration::seconds(SECONDS_PER_DAY - 1);
            format!("{}_{}", resolve(&tz, start), resolve(&tz, end))
        })
        .collect::<Vec<_>>()
        .join("-")
}

// A day boundary can fall into a DST gap; take the earliest valid instant,
// falling back to the UTC reading of the same wall-clock time.
fn resolve<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> i64 {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| naive.and_utc().timestamp())
}

pub fn twenty_four_hours_ago(now: DateTime<Utc>) -> i64 {
    (now - Duration::hours(24)).timestamp()
}

pub fn thirty_days_ago(now: DateTime<Utc>) -> i64 {
    (now - Duration::days(30)).timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_thirty_segments_today_first() {
        let today = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
        let ranges = generate_time_ranges(today);
        let segments: Vec<&str> = ranges.split('-').collect();
        assert_eq!(segments.len(), 30);

        let today_start = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap().timestamp();
        assert_eq!(
            segments[0],
            format!("{}_{}", today_start, today_start + SECONDS_PER_DAY - 1)
        );

        let oldest_start = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap().timestamp();
        assert!(segments[29].starts_with(&format!("{oldest_start}_")));
    }

    #[test]
    fn test_each_segment_spans_one_day() {
        let today = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let ranges = generate_time_ranges(today);
        for segment in ranges.split('-') {
            let (start, end) = segment.split_once('_').unwrap();
            let start: i64 = start.parse().unwrap();
            let end: i64 = end.parse().unwrap();
            assert_eq!(end - start, SECONDS_PER_DAY - 1);
        }
    }

    #[test]
    fn test_cutoff_helpers() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(twenty_four_hours_ago(now), 1_700_000_000 - 86_400);
        assert_eq!(thirty_days_ago(now), 1_700_000_000 - 30 * 86_400);
    }
}
