//! # dooit-recurrence
//!
//! Deterministic date computation for the DOOIT organizer.
//!
//! Birthdays, anniversaries and other yearly facts are stored as a single
//! origin date. Everything users see about them (when the next one is, how
//! many days away, how old someone is turning, their sign) is derived on
//! demand from that date and an explicit reference date. No function in this
//! crate reads the system clock.
//!
//! ## Modules
//!
//! - [`calendar`] — date parsing, timezone-aware reference dates, leap years, task date ranges
//! - [`occurrence`] — next occurrence, days until, ordinal and age of a yearly date
//! - [`zodiac`] — sun sign from month/day
//! - [`rule`] — explicit recurrence rules for dated facts
//! - [`upcoming`] — horizon-filtered, nearest-first occurrence lists
//! - [`display`] — "Today!", "Tomorrow", "N days" labels
//! - [`timetable`] — weekly timetable slots and clash detection
//! - [`error`] — Error types

pub mod calendar;
pub mod display;
pub mod error;
pub mod occurrence;
pub mod rule;
pub mod timetable;
pub mod upcoming;
pub mod zodiac;

pub use calendar::{parse_date, parse_date_in, reference_date_in, validate_date_range};
pub use display::{format_days_until, format_ordinal};
pub use error::RecurrenceError;
pub use occurrence::{
    age_on, age_on_with_options, compute_next_occurrence, compute_next_occurrence_with_options,
    LeapDayPolicy, NextOccurrence, OccurrenceOptions,
};
pub use rule::{Occurrence, RecurrenceRule, RecurringDateFact};
pub use timetable::{conflicts_with, find_conflicts, Conflict, TimetableEntry};
pub use upcoming::{upcoming, UpcomingOccurrence, UpcomingOptions, HORIZON_PRESETS};
pub use zodiac::{zodiac_sign, zodiac_sign_for, ZodiacSign};
