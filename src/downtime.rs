use std::time::Duration;

use chrono::TimeDelta;


const NANOS_PER_SEC: i64 = 1_000_000_000;


/// Allowed downtime within `period` for the given uptime percentage.
///
/// The result is rounded to the nearest nanosecond and then truncated toward zero to whole seconds.
/// The percentage is not range-checked: values above 100 give a negative budget,
/// values below 0 give a budget longer than the period.
/// Budgets that do not fit into an `i64` nanosecond count saturate.
pub fn calc_downtime(uptime_percent: f64, period: Duration) -> TimeDelta
{
    let period_nanos = period.as_nanos() as f64;
    let allowed_nanos = (period_nanos * (1.0 - uptime_percent / 100.0)).round();
    // float-to-int casts saturate, and NaN becomes 0
    let allowed_nanos = allowed_nanos as i64;
    TimeDelta::seconds(allowed_nanos / NANOS_PER_SEC)
}
