use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use dooit_recurrence::calendar::{days_in_month, is_leap_year};
use dooit_recurrence::{
    age_on, compute_next_occurrence, compute_next_occurrence_with_options, zodiac_sign,
    LeapDayPolicy, OccurrenceOptions, ZodiacSign,
};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        let d = d.min(days_in_month(y, m).unwrap());
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    })
}

fn policy_strategy() -> impl Strategy<Value = LeapDayPolicy> {
    prop_oneof![
        Just(LeapDayPolicy::ClampToFeb28),
        Just(LeapDayPolicy::RollToMar1)
    ]
}

proptest! {
    #[test]
    fn next_occurrence_is_on_or_after_reference(
        origin in date_strategy(),
        reference in date_strategy(),
        policy in policy_strategy(),
    ) {
        let options = OccurrenceOptions { leap_day: policy };
        let next = compute_next_occurrence_with_options(origin, reference, &options).unwrap();
        prop_assert!(next.next_occurrence >= reference);
        prop_assert!((0..=366).contains(&next.days_until));
        prop_assert_eq!(
            next.days_until,
            (next.next_occurrence - reference).num_days()
        );
        prop_assert_eq!(next.ordinal, next.next_occurrence.year() - origin.year());
    }

    #[test]
    fn next_occurrence_keeps_month_and_day(
        origin in date_strategy(),
        reference in date_strategy(),
        policy in policy_strategy(),
    ) {
        let options = OccurrenceOptions { leap_day: policy };
        let next = compute_next_occurrence_with_options(origin, reference, &options)
            .unwrap()
            .next_occurrence;
        let is_leap_origin = origin.month() == 2 && origin.day() == 29;
        if is_leap_origin && !is_leap_year(next.year()) {
            let expected = match policy {
                LeapDayPolicy::ClampToFeb28 => (2, 28),
                LeapDayPolicy::RollToMar1 => (3, 1),
            };
            prop_assert_eq!((next.month(), next.day()), expected);
        } else {
            prop_assert_eq!((next.month(), next.day()), (origin.month(), origin.day()));
        }
    }

    #[test]
    fn leap_day_origin_lands_by_policy(
        origin_year in (476i32..525).prop_map(|k| k * 4),
        reference in date_strategy(),
        policy in policy_strategy(),
    ) {
        let origin = NaiveDate::from_ymd_opt(origin_year, 2, 29).unwrap();
        let options = OccurrenceOptions { leap_day: policy };
        let next = compute_next_occurrence_with_options(origin, reference, &options).unwrap();
        let date = next.next_occurrence;
        let expected = match (is_leap_year(date.year()), policy) {
            (true, _) => (2, 29),
            (false, LeapDayPolicy::ClampToFeb28) => (2, 28),
            (false, LeapDayPolicy::RollToMar1) => (3, 1),
        };
        prop_assert_eq!((date.month(), date.day()), expected);
        prop_assert!(date >= reference);
    }

    #[test]
    fn ordinal_steps_by_one_across_occurrence(
        origin in date_strategy(),
        reference in date_strategy(),
    ) {
        let first = compute_next_occurrence(origin, reference).unwrap();
        let after = first.next_occurrence + Duration::days(1);
        let second = compute_next_occurrence(origin, after).unwrap();
        prop_assert_eq!(second.ordinal, first.ordinal + 1);
        prop_assert!(second.next_occurrence > first.next_occurrence);
    }

    #[test]
    fn computation_is_idempotent(
        origin in date_strategy(),
        reference in date_strategy(),
    ) {
        prop_assert_eq!(
            compute_next_occurrence(origin, reference).unwrap(),
            compute_next_occurrence(origin, reference).unwrap()
        );
    }

    #[test]
    fn age_agrees_with_ordinal(
        origin in date_strategy(),
        reference in date_strategy(),
    ) {
        let next = compute_next_occurrence(origin, reference).unwrap();
        let age = age_on(origin, reference).unwrap();
        let expected = if next.days_until == 0 { next.ordinal } else { next.ordinal - 1 };
        prop_assert_eq!(age, expected);
    }

    #[test]
    fn zodiac_ignores_year(a in date_strategy(), year in 1900i32..2100) {
        prop_assume!(!(a.month() == 2 && a.day() == 29) || is_leap_year(year));
        let b = NaiveDate::from_ymd_opt(year, a.month(), a.day()).unwrap();
        prop_assert_eq!(zodiac_sign(a.month(), a.day()), zodiac_sign(b.month(), b.day()));
        prop_assert!(ZodiacSign::ALL.contains(&zodiac_sign(a.month(), a.day())));
    }
}
