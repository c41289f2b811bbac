use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dooit_recurrence::calendar::validate_timezone;
use dooit_recurrence::{LeapDayPolicy, HORIZON_PRESETS};
use serde::Deserialize;

/// Top-level DOOIT CLI configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DooitConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Upcoming-list settings.
    #[serde(default)]
    pub upcoming: UpcomingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// IANA timezone used to turn the system clock into today's date.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub leap_day: LeapDayPolicy,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            leap_day: LeapDayPolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpcomingConfig {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default)]
    pub include_overdue: bool,
}

impl Default for UpcomingConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            include_overdue: false,
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_horizon_days() -> u32 {
    HORIZON_PRESETS[0]
}

impl DooitConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str).context("failed to parse TOML config")?;
        validate_timezone(&config.calendar.timezone).context("invalid timezone in config")?;
        Ok(config)
    }
}
