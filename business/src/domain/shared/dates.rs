use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Rendered in place of any value that is missing or could not be derived.
pub const PLACEHOLDER: &str = "—";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const MILLIS_PER_DAY: i64 = 86_400_000;

/// How a fractional day difference is turned into whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRounding {
    /// Round up. A partial remaining day counts as a full day.
    Ceil,
    /// Round to the nearest day, ties toward positive infinity.
    Nearest,
}

/// Parses untrusted text into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO date-times; a
/// date-time keeps only its calendar date. Anything else, including
/// out-of-range dates such as `2024-02-30`, yields `None`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|datetime| datetime.date())
}

/// Parses an optional wire value, treating `None` like an empty string.
pub fn parse_optional_date(input: Option<&str>) -> Option<NaiveDate> {
    input.and_then(parse_date)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Strict `YYYY-MM-DD` check used by form validation.
pub fn is_iso_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    shaped && NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).is_ok()
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Whole days from `from` to `to` using the given rounding.
pub fn day_offset(from: NaiveDateTime, to: NaiveDateTime, rounding: DayRounding) -> i64 {
    let millis = (to - from).num_milliseconds();
    match rounding {
        DayRounding::Ceil => -(-millis).div_euclid(MILLIS_PER_DAY),
        DayRounding::Nearest => (millis + MILLIS_PER_DAY / 2).div_euclid(MILLIS_PER_DAY),
    }
}

/// Days remaining from `now` until the start of `expiry`, rounded up.
///
/// Returns 0 on the expiry day itself and negative values once it has passed.
pub fn days_left(now: NaiveDateTime, expiry: NaiveDate) -> i64 {
    day_offset(now, start_of_day(expiry), DayRounding::Ceil)
}

/// Signed day count between two resolved dates.
pub fn days_between_dates(from: NaiveDate, to: NaiveDate) -> i64 {
    day_offset(start_of_day(from), start_of_day(to), DayRounding::Nearest)
}

/// Signed day count between two date strings, `None` when either fails to parse.
pub fn days_between(from: &str, to: &str) -> Option<i64> {
    Some(days_between_dates(parse_date(from)?, parse_date(to)?))
}

/// Adds `days` to a resolved date after rounding it to a whole number.
pub fn shift_date(date: NaiveDate, days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let whole = (days + 0.5).floor() as i64;
    date.checked_add_signed(Duration::try_days(whole)?)
}

/// Returns the ISO date `days` after `date`.
///
/// `days` is rounded to the nearest integer first so displayed dates stay
/// whole-day granular.
pub fn add_days(date: &str, days: f64) -> Option<String> {
    shift_date(parse_date(date)?, days).map(to_iso)
}

/// Renders a value or the placeholder.
pub fn or_placeholder<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).unwrap()
    }

    fn at(s: &str, h: u32, m: u32) -> NaiveDateTime {
        date(s).and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn should_parse_iso_date() {
        assert_eq!(parse_date("2024-01-10"), Some(date("2024-01-10")));
        assert_eq!(parse_date("  2024-01-10 "), Some(date("2024-01-10")));
    }

    #[test]
    fn should_parse_timestamps_to_their_calendar_date() {
        assert_eq!(
            parse_date("2024-06-10T12:30:00.123456Z"),
            Some(date("2024-06-10"))
        );
        assert_eq!(
            parse_date("2024-06-10T23:00:00+02:00"),
            Some(date("2024-06-10"))
        );
        assert_eq!(parse_date("2024-06-10T08:00:00"), Some(date("2024-06-10")));
        assert_eq!(parse_date("2024-06-10 08:00:00"), Some(date("2024-06-10")));
    }

    #[test]
    fn should_return_none_for_unusable_input() {
        for input in ["", "   ", "not-a-date", "2024-02-30", "2024-13-01", "10/06/2024"] {
            assert_eq!(parse_date(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn should_treat_missing_optional_as_none() {
        assert_eq!(parse_optional_date(None), None);
        assert_eq!(
            parse_optional_date(Some("2024-03-01")),
            Some(date("2024-03-01"))
        );
    }

    #[test]
    fn should_validate_strict_iso_shape() {
        assert!(is_iso_date("2024-06-10"));
        assert!(!is_iso_date("2024-6-10"));
        assert!(!is_iso_date("2024-06-10T00:00:00"));
        assert!(!is_iso_date("2024-02-30"));
        assert!(!is_iso_date(""));
    }

    #[test]
    fn should_count_days_between_dates() {
        assert_eq!(days_between("2024-01-01", "2024-01-10"), Some(9));
        assert_eq!(days_between("2024-01-10", "2024-01-01"), Some(-9));
        assert_eq!(days_between("2024-02-28", "2024-03-01"), Some(2));
    }

    #[test]
    fn should_return_unknown_when_either_side_is_invalid() {
        assert_eq!(days_between("", "2024-01-10"), None);
        assert_eq!(days_between("2024-01-01", "garbage"), None);
    }

    #[test]
    fn should_round_days_left_up() {
        // half a day remaining counts as a full day
        assert_eq!(days_left(at("2024-06-09", 12, 0), date("2024-06-10")), 1);
        // later the same day as expiry
        assert_eq!(days_left(at("2024-06-10", 14, 0), date("2024-06-10")), 0);
        assert_eq!(days_left(at("2024-06-10", 14, 0), date("2024-06-09")), -1);
        assert_eq!(days_left(at("2024-06-10", 0, 0), date("2024-06-14")), 4);
    }

    #[test]
    fn should_round_offsets_to_nearest_with_ties_up() {
        let from = at("2024-06-10", 0, 0);
        assert_eq!(day_offset(from, at("2024-06-10", 12, 0), DayRounding::Nearest), 1);
        assert_eq!(day_offset(from, at("2024-06-10", 11, 59), DayRounding::Nearest), 0);
        assert_eq!(day_offset(from, at("2024-06-09", 12, 0), DayRounding::Nearest), 0);
        assert_eq!(day_offset(from, at("2024-06-10", 1, 0), DayRounding::Ceil), 1);
    }

    #[test]
    fn should_roll_over_month_when_adding_days() {
        assert_eq!(add_days("2024-01-31", 1.0), Some("2024-02-01".to_string()));
        assert_eq!(add_days("2024-12-31", 1.0), Some("2025-01-01".to_string()));
        assert_eq!(add_days("2024-03-01", -1.0), Some("2024-02-29".to_string()));
    }

    #[test]
    fn should_round_fractional_day_adjustments() {
        assert_eq!(add_days("2024-01-01", 2.4), Some("2024-01-03".to_string()));
        assert_eq!(add_days("2024-01-01", 2.5), Some("2024-01-04".to_string()));
        assert_eq!(add_days("2024-01-01", -0.5), Some("2024-01-01".to_string()));
    }

    #[test]
    fn should_reject_unusable_day_adjustments() {
        assert_eq!(add_days("bad", 1.0), None);
        assert_eq!(add_days("2024-01-01", f64::NAN), None);
        assert_eq!(add_days("2024-01-01", f64::INFINITY), None);
        assert_eq!(add_days("2024-01-01", 1e300), None);
    }

    #[test]
    fn should_render_placeholder_for_missing_values() {
        assert_eq!(or_placeholder(Some(3)), "3");
        assert_eq!(or_placeholder::<i64>(None), PLACEHOLDER);
    }

    proptest! {
        #[test]
        fn parse_never_panics(input in ".*") {
            let _ = parse_date(&input);
        }

        #[test]
        fn reparsing_normalized_output_is_stable(days in -50_000i64..50_000) {
            let original = date("2000-01-01") + Duration::days(days);
            let once = parse_date(&to_iso(original)).unwrap();
            let twice = parse_date(&to_iso(once)).unwrap();
            prop_assert_eq!(once, original);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn adding_days_agrees_with_days_between(n in -3_000i64..3_000) {
            let shifted = add_days("2024-01-31", n as f64).unwrap();
            prop_assert_eq!(days_between("2024-01-31", &shifted), Some(n));
        }
    }
}
