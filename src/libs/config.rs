//! User preferences: the zone shifts are displayed in and the first day of
//! the week used by the log.
//!
//! Stored as pretty JSON in `config.json` under the data directory. A missing
//! file reads as the defaults (`UTC`, weeks starting on Sunday).
//!
//! ```rust,no_run
//! use shiftlog::libs::config::Config;
//!
//! let config = Config::read()?;
//! let zone = config.zone()?;
//! println!("Showing shifts in {}", zone.name());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::{TimeError, TimeResult};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Weekday;
use chrono_tz::Tz;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_TIME_ZONE: &str = "UTC";

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// IANA zone name shifts are displayed and entered in.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// First day of a `week` window.
    #[serde(default = "default_start_of_week")]
    pub start_of_week: Weekday,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_start_of_week() -> Weekday {
    Weekday::Sun
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_zone: default_time_zone(),
            start_of_week: default_start_of_week(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Display zone; fails on a name chrono-tz does not know.
    pub fn zone(&self) -> TimeResult<Tz> {
        parse_zone(&self.time_zone)
    }

    /// Interactive setup, seeded with the current preferences.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader);

        let time_zone: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeZone.to_string())
            .default(current.time_zone.clone())
            .validate_with(|input: &String| parse_zone(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        let labels: Vec<String> = WEEKDAYS.iter().map(|day| weekday_name(*day).to_string()).collect();
        let selected = WEEKDAYS.iter().position(|day| *day == current.start_of_week).unwrap_or(0);
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStartOfWeek.to_string())
            .items(&labels)
            .default(selected)
            .interact()?;

        Ok(Config {
            time_zone,
            start_of_week: WEEKDAYS.get(choice).copied().unwrap_or(current.start_of_week),
        })
    }
}

pub fn parse_zone(name: &str) -> TimeResult<Tz> {
    name.parse::<Tz>().map_err(|_| TimeError::UnknownZone(name.to_string()))
}

/// Accepts `sun`, `Sunday`, `MON` and the like.
pub fn parse_weekday(name: &str) -> TimeResult<Weekday> {
    name.parse::<Weekday>()
        .map_err(|_| TimeError::parse(name, "a weekday like 'sun' or 'Monday'"))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
