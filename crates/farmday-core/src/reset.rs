//! Daily server reset clock.
//!
//! The server resets at 04:00 in UTC+8, which is 20:00 UTC on the previous
//! calendar day. Nothing here is stored: every value is re-derived from the
//! clock reading passed in.

use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};
use serde::Serialize;

/// Hour of the daily reset, in UTC.
pub const RESET_HOUR_UTC: u32 = 20;

/// Shown when the reset instant has been reached.
pub const RESET_NOW: &str = "RESET NOW";

/// Fixed description of the reset in server time.
pub const SERVER_RESET_LABEL: &str = "Asia (UTC+8) | 04:00 am";

/// The reset instant in a viewer's local time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalResetLabel {
    /// 12-hour clock time, lowercase, e.g. `"10:00 pm"`.
    pub time: String,
    /// Signed offset, e.g. `"UTC+2"` or `"UTC+5.5"`.
    pub offset: String,
}

/// The next 20:00:00.000 UTC after `now`.
///
/// Only the hour is compared: from 20:00:00.000 onwards the reset is on the
/// following UTC date, before that it is today's.
pub fn next_reset_instant(now: DateTime<Utc>) -> DateTime<Utc> {
    let midnight = now
        - Duration::seconds(i64::from(now.num_seconds_from_midnight()))
        - Duration::nanoseconds(i64::from(now.nanosecond()));
    let todays_reset = midnight + Duration::hours(i64::from(RESET_HOUR_UTC));
    if now.hour() >= RESET_HOUR_UTC {
        todays_reset + Duration::days(1)
    } else {
        todays_reset
    }
}

/// Time left until the next reset. Never negative by construction.
pub fn time_until_reset(now: DateTime<Utc>) -> Duration {
    next_reset_instant(now) - now
}

/// Format a remaining duration as `HH:MM:SS`, or [`RESET_NOW`] when it is
/// zero or negative. Hours are not wrapped at 24.
pub fn format_countdown(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return RESET_NOW.to_string();
    }
    let total = remaining.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Countdown display for `now`.
pub fn countdown_string(now: DateTime<Utc>) -> String {
    format_countdown(time_until_reset(now))
}

/// `"UTC+2"`, `"UTC-5"`, `"UTC+5.5"`, `"UTC+0"`.
pub fn offset_label(offset: FixedOffset) -> String {
    let hours = f64::from(offset.local_minus_utc()) / 3600.0;
    let sign = if hours >= 0.0 { "+" } else { "" };
    format!("UTC{sign}{hours}")
}

/// The next reset as a local clock time plus its UTC offset label.
pub fn local_reset_time_label(now: DateTime<Utc>, offset: FixedOffset) -> LocalResetLabel {
    let local = next_reset_instant(now).with_timezone(&offset);
    LocalResetLabel {
        time: local.format("%I:%M %p").to_string().to_lowercase(),
        offset: offset_label(offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    #[test]
    fn early_hour_resets_today() {
        let now = utc(2024, 3, 10, 5, 0, 0);
        assert_eq!(next_reset_instant(now), utc(2024, 3, 10, 20, 0, 0));
        assert_eq!(countdown_string(now), "15:00:00");
    }

    #[test]
    fn late_hour_resets_tomorrow() {
        let now = utc(2024, 3, 10, 21, 30, 0);
        assert_eq!(next_reset_instant(now), utc(2024, 3, 11, 20, 0, 0));
        assert_eq!(countdown_string(now), "22:30:00");
    }

    #[test]
    fn exact_reset_points_to_next_day() {
        let now = utc(2024, 12, 31, 20, 0, 0);
        assert_eq!(next_reset_instant(now), utc(2025, 1, 1, 20, 0, 0));
        assert_eq!(countdown_string(now), "24:00:00");
    }

    #[test]
    fn one_millisecond_before_reset() {
        let now = utc(2024, 3, 10, 19, 59, 59) + Duration::milliseconds(999);
        assert_eq!(next_reset_instant(now), utc(2024, 3, 10, 20, 0, 0));
        assert_eq!(countdown_string(now), "00:00:00");
    }

    #[test]
    fn sub_second_remainders_are_floored() {
        let now = utc(2024, 3, 10, 19, 0, 0) + Duration::milliseconds(250);
        assert_eq!(countdown_string(now), "00:59:59");
    }

    #[test]
    fn non_positive_remaining_is_reset_now() {
        assert_eq!(format_countdown(Duration::zero()), RESET_NOW);
        assert_eq!(format_countdown(Duration::seconds(-3)), RESET_NOW);
        assert_eq!(format_countdown(Duration::hours(30) + Duration::seconds(5)), "30:00:05");
    }

    #[test]
    fn offset_labels() {
        assert_eq!(offset_label(hours(2)), "UTC+2");
        assert_eq!(offset_label(hours(-5)), "UTC-5");
        assert_eq!(offset_label(hours(0)), "UTC+0");
        assert_eq!(offset_label(FixedOffset::east_opt(5 * 3600 + 1800).unwrap()), "UTC+5.5");
    }

    #[test]
    fn local_label_in_server_timezone_is_four_am() {
        let label = local_reset_time_label(utc(2024, 3, 10, 5, 0, 0), hours(8));
        assert_eq!(label.time, "04:00 am");
        assert_eq!(label.offset, "UTC+8");
    }

    #[test]
    fn local_label_west_of_utc() {
        let label = local_reset_time_label(utc(2024, 3, 10, 5, 0, 0), hours(-5));
        assert_eq!(label.time, "03:00 pm");
        assert_eq!(label.offset, "UTC-5");
    }

    proptest! {
        #[test]
        fn countdown_never_increases_before_reset(
            start in 0i64..(20 * 3600 * 1000),
            step in 0i64..(3600 * 1000),
        ) {
            let midnight = utc(2024, 6, 1, 0, 0, 0);
            let t1 = midnight + Duration::milliseconds(start);
            let t2 = t1 + Duration::milliseconds(step);
            prop_assume!(t2 < next_reset_instant(t1));
            prop_assert!(time_until_reset(t1) >= time_until_reset(t2));
            prop_assert!(countdown_string(t1) >= countdown_string(t2));
        }

        #[test]
        fn next_reset_is_always_in_the_future(ms in 0i64..(7 * 24 * 3600 * 1000)) {
            let now = utc(2024, 6, 1, 0, 0, 0) + Duration::milliseconds(ms);
            let reset = next_reset_instant(now);
            prop_assert!(reset > now);
            prop_assert!(reset - now <= Duration::days(1));
            prop_assert_eq!(reset.hour(), RESET_HOUR_UTC);
            prop_assert_eq!(reset.minute(), 0);
        }
    }
}
