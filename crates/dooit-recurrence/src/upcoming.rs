//! "Coming up in the next N days" lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::format_days_until;
use crate::error::RecurrenceError;
use crate::occurrence::OccurrenceOptions;
use crate::rule::RecurringDateFact;
use crate::zodiac::ZodiacSign;

/// Horizons offered by the birthday list, in days.
pub const HORIZON_PRESETS: [u32; 4] = [30, 60, 90, 120];

/// Options for [`upcoming`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingOptions {
    /// Keep occurrences at most this many days away.
    pub horizon_days: u32,
    /// Keep past one-off facts (negative `days_until`).
    pub include_overdue: bool,
    pub occurrence: OccurrenceOptions,
}

impl Default for UpcomingOptions {
    fn default() -> Self {
        Self {
            horizon_days: HORIZON_PRESETS[0],
            include_overdue: false,
            occurrence: OccurrenceOptions::default(),
        }
    }
}

/// One row of an upcoming list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingOccurrence {
    pub label: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub days_until: i64,
    pub ordinal: Option<i32>,
    pub zodiac: Option<ZodiacSign>,
    /// `days_until` as shown to the user ("Today!", "Tomorrow", "5 days").
    pub display: String,
}

/// Occurrences of `facts` within the horizon, nearest first.
///
/// Ties keep the input order.
///
/// # Errors
///
/// Propagates the first [`RecurrenceError`] raised while computing an
/// occurrence.
pub fn upcoming(
    facts: &[RecurringDateFact],
    reference: NaiveDate,
    options: &UpcomingOptions,
) -> Result<Vec<UpcomingOccurrence>, RecurrenceError> {
    let horizon = i64::from(options.horizon_days);
    let mut rows = Vec::new();

    for fact in facts {
        let occ = fact.rule.occurrence(reference, &options.occurrence)?;
        if occ.days_until > horizon || (occ.days_until < 0 && !options.include_overdue) {
            continue;
        }
        rows.push(UpcomingOccurrence {
            label: fact.label.clone(),
            tags: fact.tags.clone(),
            date: occ.date,
            days_until: occ.days_until,
            ordinal: occ.ordinal,
            zodiac: fact.rule.zodiac_sign(),
            display: format_days_until(occ.days_until),
        });
    }

    rows.sort_by_key(|row| row.days_until);

    debug!(
        total = facts.len(),
        kept = rows.len(),
        horizon_days = options.horizon_days,
        %reference,
        "computed upcoming occurrences"
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference() -> NaiveDate {
        ymd(2024, 6, 15)
    }

    /// Birthdays 0, 5, 40, 90 and 200 days after 2024-06-15, listed out of order.
    fn facts() -> Vec<RecurringDateFact> {
        vec![
            RecurringDateFact::yearly("ninety", ymd(1999, 9, 13)),
            RecurringDateFact::yearly("five", ymd(2001, 6, 20)),
            RecurringDateFact::yearly("two hundred", ymd(1985, 1, 1)),
            RecurringDateFact::yearly("today", ymd(1990, 6, 15)),
            RecurringDateFact::yearly("forty", ymd(2003, 7, 25)),
        ]
    }

    #[test]
    fn test_thirty_day_horizon_keeps_nearest_two() {
        let rows = upcoming(&facts(), reference(), &UpcomingOptions::default()).unwrap();
        let days: Vec<i64> = rows.iter().map(|r| r.days_until).collect();
        assert_eq!(days, vec![0, 5]);
        assert_eq!(rows[0].label, "today");
        assert_eq!(rows[0].display, "Today!");
        assert_eq!(rows[0].ordinal, Some(34));
        assert_eq!(rows[1].label, "five");
    }

    #[test]
    fn test_wider_horizon_sorted_ascending() {
        let options = UpcomingOptions {
            horizon_days: 365,
            ..Default::default()
        };
        let rows = upcoming(&facts(), reference(), &options).unwrap();
        let days: Vec<i64> = rows.iter().map(|r| r.days_until).collect();
        assert_eq!(days, vec![0, 5, 40, 90, 200]);
    }

    #[test]
    fn test_horizon_is_inclusive() {
        let options = UpcomingOptions {
            horizon_days: 40,
            ..Default::default()
        };
        let rows = upcoming(&facts(), reference(), &options).unwrap();
        assert_eq!(rows.last().unwrap().days_until, 40);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let facts = vec![
            RecurringDateFact::yearly("b", ymd(1990, 6, 20)),
            RecurringDateFact::yearly("a", ymd(1995, 6, 20)),
        ];
        let rows = upcoming(&facts, reference(), &UpcomingOptions::default()).unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn test_overdue_one_off_facts() {
        let facts = vec![
            RecurringDateFact::once("essay", ymd(2024, 6, 12)),
            RecurringDateFact::once("exam", ymd(2024, 6, 16)),
        ];
        let rows = upcoming(&facts, reference(), &UpcomingOptions::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "exam");
        assert_eq!(rows[0].display, "Tomorrow");
        assert_eq!(rows[0].zodiac, None);

        let options = UpcomingOptions {
            include_overdue: true,
            ..Default::default()
        };
        let rows = upcoming(&facts, reference(), &options).unwrap();
        assert_eq!(rows[0].label, "essay");
        assert_eq!(rows[0].display, "3 days ago");
    }

    #[test]
    fn test_empty_input() {
        let rows = upcoming(&[], reference(), &UpcomingOptions::default()).unwrap();
        assert!(rows.is_empty());
    }
}
