//! The running clock: whether a shift is open, whether a break is running,
//! and how much break has been taken so far.
//!
//! The session is persisted between invocations as `session.json` in the data
//! directory. Every transition takes the current instant from the caller and
//! truncates it to the minute.

use crate::libs::data_storage::DataStorage;
use crate::libs::shift::{Shift, ShiftSpan};
use crate::libs::time_math::{elapsed, subtract_break, truncate_to_minute, ClockDuration};
use anyhow::Result;
use chrono::{serde::ts_seconds_option, DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use thiserror::Error;

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("already clocked in since {0}")]
    AlreadyClockedIn(DateTime<Utc>),
    #[error("not clocked in")]
    NotClockedIn,
}

/// Result of [`Session::toggle_break`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakChange {
    Started,
    /// The break that just ended.
    Ended(ClockDuration),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    #[serde(default, with = "ts_seconds_option")]
    shift_start: Option<DateTime<Utc>>,
    #[serde(default, with = "ts_seconds_option")]
    break_start: Option<DateTime<Utc>>,
    #[serde(default)]
    break_total: ClockDuration,
}

impl Session {
    pub fn load() -> Result<Session> {
        Self::load_from(&DataStorage::new().get_path(SESSION_FILE_NAME)?)
    }

    /// Reads the session at `path`; a missing file is a clocked-out session.
    pub fn load_from(path: &Path) -> Result<Session> {
        if !path.exists() {
            return Ok(Session::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new().get_path(SESSION_FILE_NAME)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, self)?;
        Ok(())
    }

    pub fn is_clocked_in(&self) -> bool {
        self.shift_start.is_some()
    }

    pub fn is_on_break(&self) -> bool {
        self.break_start.is_some()
    }

    pub fn shift_start(&self) -> Option<DateTime<Utc>> {
        self.shift_start
    }

    pub fn break_start(&self) -> Option<DateTime<Utc>> {
        self.break_start
    }

    /// Break time accumulated from breaks that have ended.
    pub fn break_total(&self) -> ClockDuration {
        self.break_total
    }

    pub fn clock_in(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if let Some(start) = self.shift_start {
            return Err(SessionError::AlreadyClockedIn(start));
        }
        *self = Session {
            shift_start: Some(truncate_to_minute(now)),
            ..Session::default()
        };
        Ok(())
    }

    /// Closes the shift and resets the session.
    ///
    /// A running break is ended first. The shift's date and span are the UTC
    /// wall-clock start and end.
    pub fn clock_out(&mut self, now: DateTime<Utc>) -> Result<Shift, SessionError> {
        let start = self.shift_start.ok_or(SessionError::NotClockedIn)?;
        let now = truncate_to_minute(now);
        if self.is_on_break() {
            self.toggle_break(now)?;
        }

        let gross = elapsed(start, now);
        let shift = Shift::new(
            start.date_naive(),
            ShiftSpan::new(start.time(), now.time()),
            self.break_total,
            subtract_break(gross, self.break_total),
        );
        *self = Session::default();
        Ok(shift)
    }

    pub fn toggle_break(&mut self, now: DateTime<Utc>) -> Result<BreakChange, SessionError> {
        if !self.is_clocked_in() {
            return Err(SessionError::NotClockedIn);
        }
        let now = truncate_to_minute(now);
        match self.break_start.take() {
            Some(started) => {
                let taken = elapsed(started, now);
                self.break_total = self.break_total + taken;
                Ok(BreakChange::Ended(taken))
            }
            None => {
                self.break_start = Some(now);
                Ok(BreakChange::Started)
            }
        }
    }

    /// Live net shift time; zero when clocked out.
    pub fn counter(&self, now: DateTime<Utc>) -> ClockDuration {
        match self.shift_start {
            Some(start) => {
                let now = truncate_to_minute(now);
                subtract_break(elapsed(start, now), self.break_counter(now))
            }
            None => ClockDuration::ZERO,
        }
    }

    /// Accumulated break plus the running one, if any.
    pub fn break_counter(&self, now: DateTime<Utc>) -> ClockDuration {
        let running = self
            .break_start
            .map(|started| elapsed(started, truncate_to_minute(now)))
            .unwrap_or(ClockDuration::ZERO);
        self.break_total + running
    }
}
