//! Error type for the time arithmetic engine.
//!
//! Every failure inside `time_math`, `shift_window`, `shift` and `draft` is
//! synchronous and returned to the immediate caller as a [`TimeError`]. The
//! command layer wraps these into `anyhow::Error` and decides how to present
//! them.

use crate::libs::shift_window::Granularity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Input did not match the pattern an operation expects.
    #[error("cannot parse '{input}', expected {expected}")]
    Parse { input: String, expected: &'static str },

    /// Break entry that is neither a whole number of minutes nor unset.
    #[error("break must be a whole number of minutes, got '{0}'")]
    InvalidBreakInput(String),

    /// `All` has no unit to step by.
    #[error("the {0} view has no previous or next window")]
    UnsupportedNavigation(Granularity),

    #[error("unknown time zone '{0}'")]
    UnknownZone(String),

    /// Wall-clock time skipped by the zone (daylight saving gap).
    #[error("{timestamp} does not exist in {zone}")]
    NonexistentLocalTime { timestamp: String, zone: String },

    #[error("date arithmetic left the supported calendar range")]
    OutOfRange,
}

impl TimeError {
    pub(crate) fn parse(input: &str, expected: &'static str) -> Self {
        TimeError::Parse {
            input: input.to_string(),
            expected,
        }
    }
}

pub type TimeResult<T> = Result<T, TimeError>;
