//! Calendar-date normalization.
//!
//! Everything downstream of this module works on [`NaiveDate`], so
//! "midnight normalization" happens exactly once: here. Instants are reduced
//! to the calendar date they fall on in a single, explicit timezone (UTC unless
//! the caller names another IANA zone). Nothing in this module reads the system
//! clock.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::RecurrenceError;

/// Milliseconds in one calendar day, used for whole-day gap computation.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Parse a date string into a calendar date.
///
/// Accepts a plain ISO 8601 date (`"1990-06-15"`) or an RFC 3339 datetime
/// (`"1990-06-15T08:30:00+02:00"`). Datetimes are reduced to their UTC date.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] if the string is neither form, or
/// names a day that does not exist (e.g. `"2023-02-29"`).
///
/// # Examples
///
/// ```
/// use dooit_recurrence::calendar::parse_date;
///
/// let date = parse_date("2024-06-15T23:30:00-02:00").unwrap();
/// assert_eq!(date.to_string(), "2024-06-16");
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, RecurrenceError> {
    parse_date_with_tz(s, &Tz::UTC)
}

/// Parse a date string, reducing datetimes to their date in `timezone`.
///
/// Plain dates are taken as written. RFC 3339 datetimes are converted to
/// `timezone` first, so a parsed instant lands on the same calendar day as a
/// clock read through [`reference_date_in`] with the same zone.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidTimezone`] if `timezone` is not a valid
/// IANA name, or [`RecurrenceError::InvalidDate`] as for [`parse_date`].
///
/// # Examples
///
/// ```
/// use dooit_recurrence::calendar::parse_date_in;
///
/// let date = parse_date_in("2024-06-15T01:00:00Z", "America/New_York").unwrap();
/// assert_eq!(date.to_string(), "2024-06-14");
/// ```
pub fn parse_date_in(s: &str, timezone: &str) -> Result<NaiveDate, RecurrenceError> {
    let tz = parse_timezone(timezone)?;
    parse_date_with_tz(s, &tz)
}

fn parse_date_with_tz(s: &str, tz: &Tz) -> Result<NaiveDate, RecurrenceError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(tz).date_naive())
        .map_err(|e| RecurrenceError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Build a calendar date from its components, rejecting impossible days.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] for month 0/13, day 0, Feb 30, etc.
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, RecurrenceError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RecurrenceError::InvalidDate(format!(
            "{year:04}-{month:02}-{day:02} is not a calendar day"
        ))
    })
}

/// The calendar date of `instant` as seen in `timezone`.
///
/// This is how a caller turns "now" into the reference date the calculator
/// expects.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidTimezone`] if `timezone` is not a valid
/// IANA name.
pub fn reference_date_in(
    instant: DateTime<Utc>,
    timezone: &str,
) -> Result<NaiveDate, RecurrenceError> {
    let tz = parse_timezone(timezone)?;
    Ok(instant.with_timezone(&tz).date_naive())
}

/// Whole days from `from` to `to`: ceiling of the millisecond gap over
/// [`MS_PER_DAY`]. Negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let ms = (to - from).num_milliseconds();
    ms.div_euclid(MS_PER_DAY) + i64::from(ms.rem_euclid(MS_PER_DAY) != 0)
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Check that a task's date range is well ordered.
///
/// A range that starts and ends on the same day is valid.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDateRange`] if `end` is before `start`.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), RecurrenceError> {
    if end < start {
        return Err(RecurrenceError::InvalidDateRange(format!(
            "end date {end} is before start date {start}"
        )));
    }
    Ok(())
}

/// True when `date` is Feb 29.
pub(crate) fn is_leap_day(date: NaiveDate) -> bool {
    date.month() == 2 && date.day() == 29
}

/// Check that `timezone` is a known IANA name.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidTimezone`] otherwise.
pub fn validate_timezone(timezone: &str) -> Result<(), RecurrenceError> {
    parse_timezone(timezone).map(|_| ())
}

fn parse_timezone(s: &str) -> Result<Tz, RecurrenceError> {
    s.parse::<Tz>()
        .map_err(|_| RecurrenceError::InvalidTimezone(format!("'{}'", s)))
}
