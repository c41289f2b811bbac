use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, Utc, Weekday};
use dooit_recurrence::{
    age_on_with_options, compute_next_occurrence_with_options, find_conflicts, format_days_until,
    format_ordinal, parse_date_in, reference_date_in, upcoming, zodiac_sign_for, OccurrenceOptions,
    RecurringDateFact, TimetableEntry, UpcomingOptions, ZodiacSign,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{ConflictsArgs, NextArgs, UpcomingArgs, ZodiacArgs};
use crate::config::DooitConfig;

#[derive(Debug, Serialize)]
struct NextReport {
    origin: NaiveDate,
    reference: NaiveDate,
    next_occurrence: NaiveDate,
    days_until: i64,
    ordinal: i32,
    ordinal_label: String,
    age: i32,
    display: String,
    zodiac: ZodiacSign,
}

#[derive(Debug, Serialize)]
struct ConflictReport {
    first: String,
    second: String,
    weekday: Weekday,
    overlap_start: NaiveTime,
    overlap_end: NaiveTime,
}

pub fn next(args: NextArgs, config: &DooitConfig) -> Result<()> {
    let origin = parse_date_in(&args.origin, &config.calendar.timezone)
        .context("invalid origin date")?;
    let reference = resolve_reference(args.today.as_deref(), config)?;
    let options = OccurrenceOptions {
        leap_day: args
            .leap_day
            .map(Into::into)
            .unwrap_or(config.calendar.leap_day),
    };

    let next = compute_next_occurrence_with_options(origin, reference, &options)?;
    let age = age_on_with_options(origin, reference, &options)?;
    info!(%origin, %reference, days_until = next.days_until, "computed next occurrence");

    print_json(&NextReport {
        origin,
        reference,
        next_occurrence: next.next_occurrence,
        days_until: next.days_until,
        ordinal: next.ordinal,
        ordinal_label: format_ordinal(next.ordinal),
        age,
        display: format_days_until(next.days_until),
        zodiac: zodiac_sign_for(origin),
    })
}

pub fn zodiac(args: ZodiacArgs, config: &DooitConfig) -> Result<()> {
    let date = parse_date_in(&args.date, &config.calendar.timezone).context("invalid date")?;
    let sign = zodiac_sign_for(date);
    println!("{} {}", sign, sign.symbol());
    Ok(())
}

pub fn upcoming_list(args: UpcomingArgs, config: &DooitConfig) -> Result<()> {
    let facts: Vec<RecurringDateFact> = read_json(&args.input)?;
    info!(path = %args.input.display(), n = facts.len(), "loaded facts");

    let reference = resolve_reference(args.today.as_deref(), config)?;
    let options = UpcomingOptions {
        horizon_days: args.horizon.unwrap_or(config.upcoming.horizon_days),
        include_overdue: args.include_overdue || config.upcoming.include_overdue,
        occurrence: OccurrenceOptions {
            leap_day: args
                .leap_day
                .map(Into::into)
                .unwrap_or(config.calendar.leap_day),
        },
    };

    let rows = upcoming(&facts, reference, &options)?;
    info!(n = rows.len(), horizon_days = options.horizon_days, "upcoming list ready");
    print_json(&rows)
}

pub fn conflicts(args: ConflictsArgs) -> Result<()> {
    let entries: Vec<TimetableEntry> = read_json(&args.input)?;
    info!(path = %args.input.display(), n = entries.len(), "loaded timetable");

    let reports: Vec<ConflictReport> = find_conflicts(&entries)?
        .into_iter()
        .map(|c| ConflictReport {
            first: entries[c.first].label.clone(),
            second: entries[c.second].label.clone(),
            weekday: c.weekday,
            overlap_start: c.overlap_start,
            overlap_end: c.overlap_end,
        })
        .collect();
    print_json(&reports)
}

/// The reference date: the explicit `--today` value, or the system clock read
/// once. Both are reduced to a date in the configured timezone.
fn resolve_reference(today: Option<&str>, config: &DooitConfig) -> Result<NaiveDate> {
    match today {
        Some(s) => parse_date_in(s, &config.calendar.timezone).context("invalid --today date"),
        None => reference_date_in(Utc::now(), &config.calendar.timezone)
            .context("invalid timezone in config"),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}
