//! Recurrence rules attached to dated facts.
//!
//! Whether a fact repeats is stated explicitly by its [`RecurrenceRule`]; it is
//! never inferred from a category label.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::days_between;
use crate::error::RecurrenceError;
use crate::occurrence::{compute_next_occurrence_with_options, OccurrenceOptions};
use crate::zodiac::{zodiac_sign_for, ZodiacSign};

/// How a dated fact repeats.
///
/// Serialized with a `kind` tag:
/// `{"kind": "yearly", "origin_date": "1990-06-15"}` or
/// `{"kind": "none", "date": "2024-07-01"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Happens once, on `date`.
    #[serde(rename = "none")]
    Once { date: NaiveDate },
    /// Happens every year on `origin_date`'s month and day.
    Yearly { origin_date: NaiveDate },
}

/// A concrete occurrence of a fact relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    /// Days from the reference date. Negative only for a past one-off fact.
    pub days_until: i64,
    /// Which yearly occurrence this is; `None` for one-off facts.
    pub ordinal: Option<i32>,
}

impl RecurrenceRule {
    pub fn is_recurring(&self) -> bool {
        matches!(self, RecurrenceRule::Yearly { .. })
    }

    /// The date the rule is anchored on.
    pub fn anchor_date(&self) -> NaiveDate {
        match *self {
            RecurrenceRule::Once { date } => date,
            RecurrenceRule::Yearly { origin_date } => origin_date,
        }
    }

    /// The occurrence that matters at `reference`: the next one for yearly
    /// rules, the only one (possibly past) for one-off rules.
    ///
    /// # Errors
    ///
    /// Propagates [`RecurrenceError::InvalidDate`] from the calculator.
    pub fn occurrence(
        &self,
        reference: NaiveDate,
        options: &OccurrenceOptions,
    ) -> Result<Occurrence, RecurrenceError> {
        match *self {
            RecurrenceRule::Once { date } => Ok(Occurrence {
                date,
                days_until: days_between(reference, date),
                ordinal: None,
            }),
            RecurrenceRule::Yearly { origin_date } => {
                let next =
                    compute_next_occurrence_with_options(origin_date, reference, options)?;
                Ok(Occurrence {
                    date: next.next_occurrence,
                    days_until: next.days_until,
                    ordinal: Some(next.ordinal),
                })
            }
        }
    }

    /// Sun sign of a yearly fact's origin date; `None` for one-off facts.
    pub fn zodiac_sign(&self) -> Option<ZodiacSign> {
        match *self {
            RecurrenceRule::Once { .. } => None,
            RecurrenceRule::Yearly { origin_date } => Some(zodiac_sign_for(origin_date)),
        }
    }
}

/// A user-entered dated fact: a birthday, an anniversary, a one-off event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringDateFact {
    pub label: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rule: RecurrenceRule,
}

impl RecurringDateFact {
    pub fn yearly(label: impl Into<String>, origin_date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            tags: Vec::new(),
            rule: RecurrenceRule::Yearly { origin_date },
        }
    }

    pub fn once(label: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            tags: Vec::new(),
            rule: RecurrenceRule::Once { date },
        }
    }
}
