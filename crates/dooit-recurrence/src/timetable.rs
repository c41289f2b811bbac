//! Weekly timetable entries and clash detection.
//!
//! A timetable slot occupies the half-open interval `[start, end)` on one
//! weekday, so a class ending at 10:00 does not clash with one starting at
//! 10:00.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RecurrenceError;

/// One weekly slot in a student's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub label: String,
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimetableEntry {
    /// Build an entry, rejecting empty or inverted slots.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidTimeRange`] unless `start < end`.
    pub fn new(
        label: impl Into<String>,
        weekday: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, RecurrenceError> {
        let entry = Self {
            label: label.into(),
            weekday,
            start,
            end,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Check `start < end`. Entries built through serde skip [`TimetableEntry::new`].
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidTimeRange`] unless `start < end`.
    pub fn validate(&self) -> Result<(), RecurrenceError> {
        if self.start >= self.end {
            return Err(RecurrenceError::InvalidTimeRange(format!(
                "'{}' on {}: start {} is not before end {}",
                self.label, self.weekday, self.start, self.end
            )));
        }
        Ok(())
    }

    /// Whether two slots share any moment.
    pub fn overlaps(&self, other: &TimetableEntry) -> bool {
        self.weekday == other.weekday && self.start < other.end && other.start < self.end
    }
}

/// Two entries that clash, identified by index into the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub first: usize,
    pub second: usize,
    pub weekday: Weekday,
    pub overlap_start: NaiveTime,
    pub overlap_end: NaiveTime,
}

/// Every clashing pair in `entries`, ordered by `(first, second)` with
/// `first < second`.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidTimeRange`] for the first entry whose
/// start is not before its end.
pub fn find_conflicts(entries: &[TimetableEntry]) -> Result<Vec<Conflict>, RecurrenceError> {
    for entry in entries {
        entry.validate()?;
    }

    let mut conflicts = Vec::new();
    for (i, a) in entries.iter().enumerate() {
        for (j, b) in entries.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                conflicts.push(Conflict {
                    first: i,
                    second: j,
                    weekday: a.weekday,
                    overlap_start: a.start.max(b.start),
                    overlap_end: a.end.min(b.end),
                });
            }
        }
    }

    debug!(
        entries = entries.len(),
        conflicts = conflicts.len(),
        "checked timetable"
    );
    Ok(conflicts)
}

/// Indices of `existing` entries that clash with `candidate`.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidTimeRange`] if `candidate` is invalid.
pub fn conflicts_with(
    candidate: &TimetableEntry,
    existing: &[TimetableEntry],
) -> Result<Vec<usize>, RecurrenceError> {
    candidate.validate()?;
    Ok(existing
        .iter()
        .enumerate()
        .filter(|(_, e)| candidate.overlaps(e))
        .map(|(i, _)| i)
        .collect())
}
