//! Input validation for dates and metric values.
//!
//! Dates are `YYYY-MM-DD` strings checked against the Gregorian calendar. No
//! bounds are placed on the year. Metric values must be finite numbers, and
//! humidity, UV index and wind speed must also fall inside the limits of the
//! active [`StationConfig`].

use crate::config::StationConfig;
use crate::error::{Result, StationError};
use crate::model::Metric;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Storage key format, also the layout the user types.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout of a date in the report, e.g. `Jan 05, 2025 (Sun)`.
const DISPLAY_FORMAT: &str = "%b %d, %Y (%a)";

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// Gregorian leap year rule.
///
/// ```
/// use wxstation::validate::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        1..=12 => 31,
        _ => 0,
    }
}

/// Returns `true` if `text` is a `YYYY-MM-DD` string naming a real calendar day.
pub fn validate_date(text: &str) -> bool {
    split_date(text).is_some()
}

fn split_date(text: &str) -> Option<(i32, u32, u32)> {
    if !DATE_PATTERN.is_match(text) {
        return None;
    }

    // The pattern guarantees three all-digit fields.
    let year: i32 = text[0..4].parse().ok()?;
    let month: u32 = text[5..7].parse().ok()?;
    let day: u32 = text[8..10].parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    if day > days_in_month(year, month) {
        return None;
    }

    Some((year, month, day))
}

/// Parses a validated date string into a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    split_date(text)
        .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(|| StationError::InvalidDate(text.to_string()))
}

/// Renders a date key for display.
///
/// ```
/// use wxstation::validate::format_date;
///
/// assert_eq!(format_date("2025-01-05").unwrap(), "Jan 05, 2025 (Sun)");
/// ```
pub fn format_date(text: &str) -> Result<String> {
    let date = parse_date(text)?;
    Ok(date.format(DISPLAY_FORMAT).to_string())
}

/// Returns `true` if the date key comes after `today`.
///
/// Keys are fixed-width ISO dates, so string order is chronological order.
pub fn is_future(text: &str, today: NaiveDate) -> bool {
    text > today.format(DATE_FORMAT).to_string().as_str()
}

/// Parses user input as a finite real number.
pub fn parse_metric(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| StationError::Input(format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(StationError::Input(format!(
            "'{}' is not a finite number",
            trimmed
        )));
    }

    Ok(value)
}

/// Checks `value` against the configured limits for `metric`.
pub fn check_range(metric: Metric, value: f64, config: &StationConfig) -> Result<()> {
    match config.limits(metric) {
        Some(limits) if !limits.contains(value) => Err(StationError::OutOfRange {
            metric,
            value,
            min: limits.min,
            max: limits.max,
        }),
        _ => Ok(()),
    }
}
