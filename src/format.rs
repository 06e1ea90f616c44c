use chrono::TimeDelta;
use thiserror::Error;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("provided duration is too small: less than 1s")]
    TooSmall,
}

/// Format a duration as days, hours, minutes and seconds, e.g. `3d 14h 2m 5s`.
///
/// Seconds are always present. A larger unit is only shown when the duration reaches it,
/// and then every smaller unit is shown as well, even if zero (`1h 0m 0s`).
/// Sub-second remainders are discarded.
/// Durations shorter than one second, including zero and negative durations, are rejected.
pub fn format_duration(d: TimeDelta) -> Result<String, FormatError>
{
    if d < TimeDelta::seconds(1) {
        return Err(FormatError::TooSmall);
    }

    let total_secs = d.num_seconds();
    let total_mins = total_secs / 60;
    let total_hours = total_mins / 60;
    let days = total_hours / 24;

    let (secs, mins, hours) = (total_secs % 60, total_mins % 60, total_hours % 24);

    let s =
        if days > 0 {
            format!("{days}d {hours}h {mins}m {secs}s")
        } else if total_hours > 0 {
            format!("{hours}h {mins}m {secs}s")
        } else if total_mins > 0 {
            format!("{mins}m {secs}s")
        } else {
            format!("{secs}s")
        };
    Ok(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_secs(secs: i64) -> String {
        format_duration(TimeDelta::seconds(secs)).unwrap()
    }

    #[test]
    fn one_second_boundary() {
        assert_eq!(format_duration(TimeDelta::nanoseconds(999_999_999)), Err(FormatError::TooSmall));
        assert_eq!(format_duration(TimeDelta::nanoseconds(1_000_000_000)).unwrap(), "1s");
    }

    #[test]
    fn zero_and_negative_are_too_small() {
        assert_eq!(format_duration(TimeDelta::zero()), Err(FormatError::TooSmall));
        assert_eq!(format_duration(TimeDelta::seconds(-5)), Err(FormatError::TooSmall));
        assert_eq!(format_duration(TimeDelta::seconds(-86_400)), Err(FormatError::TooSmall));
    }

    #[test]
    fn error_message() {
        assert_eq!(FormatError::TooSmall.to_string(), "provided duration is too small: less than 1s");
    }

    #[test]
    fn units_cascade() {
        assert_eq!(fmt_secs(59), "59s");
        assert_eq!(fmt_secs(60), "1m 0s");
        assert_eq!(fmt_secs(2419), "40m 19s");
        assert_eq!(fmt_secs(3600), "1h 0m 0s");
        assert_eq!(fmt_secs(7257), "2h 0m 57s");
        assert_eq!(fmt_secs(86_399), "23h 59m 59s");
        assert_eq!(fmt_secs(86_400), "1d 0h 0m 0s");
        assert_eq!(fmt_secs(309_725), "3d 14h 2m 5s");
        assert_eq!(fmt_secs(336 * 86_400), "336d 0h 0m 0s");
    }

    #[test]
    fn sub_seconds_are_dropped() {
        let d = TimeDelta::seconds(61) + TimeDelta::milliseconds(999);
        assert_eq!(format_duration(d).unwrap(), "1m 1s");
    }

    #[test]
    fn same_input_same_output() {
        let d = TimeDelta::seconds(123_456);
        assert_eq!(format_duration(d), format_duration(d));
    }
}
