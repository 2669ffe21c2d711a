use chrono::{NaiveTime, Timelike};

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Worked hours between two clock times on the same day, minus the break.
///
/// Returns `None` when either time is missing. An end before the start counts
/// as zero worked minutes; shifts crossing midnight are not supported.
pub fn compute_duration_hours(
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    break_minutes: u32,
) -> Option<f64> {
    let (start, end) = start_time.zip(end_time)?;
    let raw = (minutes_since_midnight(end) - minutes_since_midnight(start)).max(0);
    let effective = (raw - i64::from(break_minutes)).max(0);
    Some(effective as f64 / 60.0)
}
