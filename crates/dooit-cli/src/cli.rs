use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dooit_recurrence::LeapDayPolicy;

/// DOOIT date tools: birthdays, upcoming events and timetable clashes.
#[derive(Parser)]
#[command(name = "dooit", version, about = "DOOIT birthday and timetable date tools")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Next occurrence, days until and ordinal of a yearly date.
    Next(NextArgs),
    /// Sun sign of a date.
    Zodiac(ZodiacArgs),
    /// Facts from a JSON file coming up within a horizon.
    Upcoming(UpcomingArgs),
    /// Clashing slots in a JSON timetable file.
    Conflicts(ConflictsArgs),
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Origin date (YYYY-MM-DD or RFC 3339), e.g. a birth date.
    pub origin: String,

    /// Reference date; defaults to today in the configured timezone.
    #[arg(short, long)]
    pub today: Option<String>,

    /// Where Feb 29 origins fall in common years.
    #[arg(long = "leap-day", value_enum)]
    pub leap_day: Option<LeapDayArg>,
}

/// Arguments for the `zodiac` subcommand.
#[derive(clap::Args)]
pub struct ZodiacArgs {
    /// Date (YYYY-MM-DD or RFC 3339).
    pub date: String,
}

/// Arguments for the `upcoming` subcommand.
#[derive(clap::Args)]
pub struct UpcomingArgs {
    /// JSON file holding an array of facts.
    pub input: PathBuf,

    /// Horizon in days; overrides the configured value.
    #[arg(short = 'n', long)]
    pub horizon: Option<u32>,

    /// Reference date; defaults to today in the configured timezone.
    #[arg(short, long)]
    pub today: Option<String>,

    /// Also list one-off facts whose date has passed.
    #[arg(long = "include-overdue")]
    pub include_overdue: bool,

    /// Where Feb 29 origins fall in common years.
    #[arg(long = "leap-day", value_enum)]
    pub leap_day: Option<LeapDayArg>,
}

/// Arguments for the `conflicts` subcommand.
#[derive(clap::Args)]
pub struct ConflictsArgs {
    /// JSON file holding an array of timetable entries.
    pub input: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LeapDayArg {
    Feb28,
    Mar1,
}

impl From<LeapDayArg> for LeapDayPolicy {
    fn from(arg: LeapDayArg) -> Self {
        match arg {
            LeapDayArg::Feb28 => LeapDayPolicy::ClampToFeb28,
            LeapDayArg::Mar1 => LeapDayPolicy::RollToMar1,
        }
    }
}
