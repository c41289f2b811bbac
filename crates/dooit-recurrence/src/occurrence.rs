//! Next-occurrence computation for yearly recurring dates.
//!
//! Given an origin date (a birth date, the first occurrence of an anniversary)
//! and a reference date, these functions answer: when does it happen next, how
//! many days away is that, and which occurrence will it be ("turning 34").
//!
//! All functions are pure. The caller supplies the reference date; nothing
//! here reads the system clock. Use [`crate::calendar::reference_date_in`] to
//! derive one from an instant.
//!
//! # Leap days
//!
//! A Feb 29 origin has no exact anniversary in common years. The
//! [`LeapDayPolicy`] in [`OccurrenceOptions`] decides where it lands; the
//! default is Feb 28.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, days_between};
use crate::error::RecurrenceError;

/// Where a Feb 29 origin falls in a year without Feb 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    /// Celebrate on Feb 28.
    #[default]
    #[serde(alias = "feb28")]
    ClampToFeb28,
    /// Celebrate on Mar 1.
    #[serde(alias = "mar1")]
    RollToMar1,
}

/// Options for [`compute_next_occurrence_with_options`] and [`age_on_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceOptions {
    /// Placement of Feb 29 origins in common years.
    #[serde(default)]
    pub leap_day: LeapDayPolicy,
}

/// The next occurrence of a yearly date relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextOccurrence {
    /// The earliest occurrence on or after the reference date.
    pub next_occurrence: NaiveDate,
    /// Whole days from the reference date to `next_occurrence` (0 = today).
    pub days_until: i64,
    /// `next_occurrence.year - origin.year`, e.g. the age being turned.
    pub ordinal: i32,
}

/// Compute the next occurrence of `origin`'s month/day on or after `reference`,
/// using the default [`LeapDayPolicy`].
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] only if the occurrence would fall
/// outside the representable calendar range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dooit_recurrence::occurrence::compute_next_occurrence;
///
/// let origin = NaiveDate::from_ymd_opt(1990, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let next = compute_next_occurrence(origin, today).unwrap();
/// assert_eq!(next.next_occurrence, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
/// assert_eq!(next.days_until, 209);
/// assert_eq!(next.ordinal, 35);
/// ```
pub fn compute_next_occurrence(
    origin: NaiveDate,
    reference: NaiveDate,
) -> Result<NextOccurrence, RecurrenceError> {
    compute_next_occurrence_with_options(origin, reference, &OccurrenceOptions::default())
}

/// Compute the next occurrence of `origin` on or after `reference` with options.
///
/// The occurrence in `reference`'s year is used unless it is strictly earlier
/// than `reference`, in which case the following year's is used. An occurrence
/// on the reference date itself counts: `days_until` is then 0.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] only if the occurrence would fall
/// outside the representable calendar range.
pub fn compute_next_occurrence_with_options(
    origin: NaiveDate,
    reference: NaiveDate,
    options: &OccurrenceOptions,
) -> Result<NextOccurrence, RecurrenceError> {
    let mut candidate = occurrence_in_year(origin, reference.year(), options.leap_day)?;
    if candidate < reference {
        candidate = occurrence_in_year(origin, reference.year() + 1, options.leap_day)?;
    }

    Ok(NextOccurrence {
        next_occurrence: candidate,
        days_until: days_between(reference, candidate),
        ordinal: candidate.year() - origin.year(),
    })
}

/// Completed years between `origin` and `reference` (a person's age), using
/// the default [`LeapDayPolicy`].
///
/// An origin later than `reference` yields a negative value rather than an
/// error.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] only if this year's occurrence
/// falls outside the representable calendar range.
pub fn age_on(origin: NaiveDate, reference: NaiveDate) -> Result<i32, RecurrenceError> {
    age_on_with_options(origin, reference, &OccurrenceOptions::default())
}

/// Completed years between `origin` and `reference` with options.
///
/// A Feb 29 origin ages on the day its [`LeapDayPolicy`] places the occurrence.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] only if this year's occurrence
/// falls outside the representable calendar range.
pub fn age_on_with_options(
    origin: NaiveDate,
    reference: NaiveDate,
    options: &OccurrenceOptions,
) -> Result<i32, RecurrenceError> {
    let this_year = occurrence_in_year(origin, reference.year(), options.leap_day)?;
    let years = reference.year() - origin.year();
    Ok(if reference < this_year { years - 1 } else { years })
}

/// The date on which `origin` recurs in `year`.
///
/// Only Feb 29 origins in common years consult `policy`.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] if `year` is outside chrono's
/// supported range.
pub fn occurrence_in_year(
    origin: NaiveDate,
    year: i32,
    policy: LeapDayPolicy,
) -> Result<NaiveDate, RecurrenceError> {
    let (month, day) = if calendar::is_leap_day(origin) && !calendar::is_leap_year(year) {
        match policy {
            LeapDayPolicy::ClampToFeb28 => (2, 28),
            LeapDayPolicy::RollToMar1 => (3, 1),
        }
    } else {
        (origin.month(), origin.day())
    };
    calendar::date_from_ymd(year, month, day)
}
