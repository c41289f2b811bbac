//! End-to-end checks against a fixed "today" of 2024-06-15.

use chrono::NaiveDate;

use dooit_recurrence::{
    compute_next_occurrence, format_days_until, upcoming, zodiac_sign_for, RecurringDateFact,
    UpcomingOptions, ZodiacSign,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    ymd(2024, 6, 15)
}

#[test]
fn birthday_today() {
    let next = compute_next_occurrence(ymd(1990, 6, 15), today()).unwrap();
    assert_eq!(next.days_until, 0);
    assert_eq!(next.ordinal, 34);
    assert_eq!(format_days_until(next.days_until), "Today!");
}

#[test]
fn birthday_tomorrow() {
    let next = compute_next_occurrence(ymd(1990, 6, 16), today()).unwrap();
    assert_eq!(next.days_until, 1);
    assert_eq!(next.ordinal, 34);
    assert_eq!(format_days_until(next.days_until), "Tomorrow");
}

#[test]
fn birthday_already_passed() {
    let next = compute_next_occurrence(ymd(1990, 1, 10), today()).unwrap();
    assert_eq!(next.next_occurrence, ymd(2025, 1, 10));
    assert_eq!(next.days_until, 209);
    assert_eq!(next.ordinal, 35);
}

#[test]
fn zodiac_boundaries() {
    assert_eq!(zodiac_sign_for(ymd(2000, 12, 25)), ZodiacSign::Capricorn);
    assert_eq!(zodiac_sign_for(ymd(1995, 3, 21)), ZodiacSign::Aries);
}

#[test]
fn thirty_day_horizon() {
    // 0, 5, 40, 90 and 200 days out.
    let facts = vec![
        RecurringDateFact::yearly("a", ymd(1990, 6, 15)),
        RecurringDateFact::yearly("b", ymd(1990, 6, 20)),
        RecurringDateFact::yearly("c", ymd(1990, 7, 25)),
        RecurringDateFact::yearly("d", ymd(1990, 9, 13)),
        RecurringDateFact::yearly("e", ymd(1990, 1, 1)),
    ];
    let rows = upcoming(&facts, today(), &UpcomingOptions::default()).unwrap();
    let got: Vec<(&str, i64)> = rows
        .iter()
        .map(|r| (r.label.as_str(), r.days_until))
        .collect();
    assert_eq!(got, vec![("a", 0), ("b", 5)]);
}
