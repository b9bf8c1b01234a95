//! Duration and timestamp arithmetic for shift tracking.
//!
//! This module holds every computation that turns instants, wall-clock
//! points and break entries into shift durations, and every formatting rule
//! that turns those durations back into text for the terminal or for storage.
//! Nothing here reads the clock, the configuration or the database; callers
//! pass everything in.
//!
//! ## Duration Semantics
//!
//! Two elapsed-time rules coexist and are selected by the call path:
//!
//! - **Wrapped** ([`elapsed`], [`subtract_break`]): whole minutes between two
//!   instants with the hour field reduced modulo 24. A 30 hour span reads
//!   `6:00`. This is what the clock-in/clock-out flow has always stored, and
//!   stored totals depend on it.
//! - **True** ([`elapsed_unwrapped`], [`total_between`]): whole minutes with
//!   no wrap. A span from Wednesday 1:18 PM to Thursday 1:18 PM reads `24:00`.
//!   Shifts entered or edited by hand use this rule.
//!
//! ## Format Specifications
//!
//! - **Clock duration**: `H:MM`, hours unpadded, minutes two digits, `-`
//!   prefix when negative (`5:30`, `0:05`, `-1:15`)
//! - **Human duration**: `5h 30m`, or `30m` when there are no whole hours
//! - **Session timestamp**: `yyyy.MM.dd.hh:mm a` (`2023.01.22.09:05 AM`)
//! - **Clock time**: `h:mm a` (`9:05 AM`)
//!
//! ## Examples
//!
//! ```rust
//! use shiftlog::libs::time_math::{humanize, minutes_to_clock, ClockDuration};
//!
//! let total: ClockDuration = "5:30".parse()?;
//! assert_eq!(humanize(total), "5h 30m");
//! assert_eq!(minutes_to_clock(90).to_string(), "1:30");
//! # Ok::<(), shiftlog::libs::error::TimeError>(())
//! ```

use crate::libs::error::{TimeError, TimeResult};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Timelike, Utc};
use chrono_tz::Tz;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Session timestamp layout, e.g. `2023.01.22.12:12 PM`.
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d.%I:%M %p";

/// Wall-clock time layout used in shift spans, e.g. `1:18 PM`.
pub const CLOCK_TIME_FORMAT: &str = "%-I:%M %p";

/// Placeholder shown while no break has been entered.
pub const UNSET_BREAK: &str = "---";

/// Year assumed for wall-clock labels that carry only month and day.
pub const SYNTHETIC_YEAR: i32 = 1970;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Largest duration magnitude, in minutes, that a `TimeDelta` can hold.
pub const MAX_MINUTES: i64 = i64::MAX / 60_000;

/// A signed whole-minute duration.
///
/// The value is held as one signed minute count, so there is exactly one
/// representation for every duration: `hours()` and `minutes()` always
/// describe the magnitude and `is_negative()` carries the sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockDuration {
    total_minutes: i64,
}

impl ClockDuration {
    pub const ZERO: ClockDuration = ClockDuration { total_minutes: 0 };

    pub const fn from_minutes(total_minutes: i64) -> Self {
        ClockDuration { total_minutes }
    }

    /// Builds a duration from a magnitude and a sign.
    pub fn from_parts(hours: i64, minutes: i64, negative: bool) -> Self {
        let magnitude = hours.abs() * 60 + minutes.abs();
        Self::from_minutes(if negative { -magnitude } else { magnitude })
    }

    /// Whole minutes of a chrono duration, truncated toward zero.
    pub fn from_delta(delta: TimeDelta) -> Self {
        Self::from_minutes(delta.num_minutes())
    }

    pub fn to_delta(self) -> TimeResult<TimeDelta> {
        TimeDelta::try_minutes(self.total_minutes).ok_or(TimeError::OutOfRange)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.total_minutes.checked_add(rhs.total_minutes).map(Self::from_minutes)
    }

    pub const fn total_minutes(self) -> i64 {
        self.total_minutes
    }

    /// Whole hours of the magnitude, unbounded.
    pub const fn hours(self) -> i64 {
        self.total_minutes.abs() / 60
    }

    /// Remaining minutes of the magnitude, `0..=59`.
    pub const fn minutes(self) -> i64 {
        self.total_minutes.abs() % 60
    }

    pub const fn is_negative(self) -> bool {
        self.total_minutes < 0
    }

    pub const fn abs(self) -> Self {
        Self::from_minutes(self.total_minutes.abs())
    }

    /// Reduces the hour field modulo 24, keeping the sign.
    fn wrapped(total_minutes: i64) -> Self {
        Self::from_minutes(total_minutes.signum() * (total_minutes.abs() % MINUTES_PER_DAY))
    }

    /// Renders the duration as `Xh Ym`, or `Ym` when there are no whole hours.
    pub fn humanize(self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if self.hours() != 0 {
            format!("{}{}h {}m", sign, self.hours(), self.minutes())
        } else {
            format!("{}{}m", sign, self.minutes())
        }
    }
}

impl fmt::Display for ClockDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}:{:02}", sign, self.hours(), self.minutes())
    }
}

impl FromStr for ClockDuration {
    type Err = TimeError;

    /// Parses `H:MM` or `-H:MM`.
    fn from_str(s: &str) -> TimeResult<Self> {
        const EXPECTED: &str = "a duration like H:MM";
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (hours, minutes) = body.split_once(':').ok_or_else(|| TimeError::parse(s, EXPECTED))?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hours) || !all_digits(minutes) || minutes.len() > 2 {
            return Err(TimeError::parse(s, EXPECTED));
        }

        let hours: i64 = hours.parse().map_err(|_| TimeError::parse(s, EXPECTED))?;
        let minutes: i64 = minutes.parse().map_err(|_| TimeError::parse(s, EXPECTED))?;
        if minutes > 59 {
            return Err(TimeError::parse(s, EXPECTED));
        }
        let magnitude = hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .filter(|m| *m <= MAX_MINUTES)
            .ok_or_else(|| TimeError::parse(s, EXPECTED))?;

        Ok(Self::from_minutes(if negative { -magnitude } else { magnitude }))
    }
}

impl Add for ClockDuration {
    type Output = ClockDuration;

    fn add(self, rhs: Self) -> Self {
        Self::from_minutes(self.total_minutes + rhs.total_minutes)
    }
}

impl Sub for ClockDuration {
    type Output = ClockDuration;

    fn sub(self, rhs: Self) -> Self {
        Self::from_minutes(self.total_minutes - rhs.total_minutes)
    }
}

impl Neg for ClockDuration {
    type Output = ClockDuration;

    fn neg(self) -> Self {
        Self::from_minutes(-self.total_minutes)
    }
}

impl Sum for ClockDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ClockDuration::ZERO, |acc, d| acc + d)
    }
}

impl<'a> Sum<&'a ClockDuration> for ClockDuration {
    fn sum<I: Iterator<Item = &'a ClockDuration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for ClockDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A break length typed by the user, in minutes.
///
/// `Unset` stands for the `---` placeholder: nothing has been entered yet.
/// It is distinct from any parse failure, which is reported as
/// [`TimeError::InvalidBreakInput`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BreakEntry {
    #[default]
    Unset,
    Minutes(u32),
}

impl BreakEntry {
    /// Minutes to subtract; an unset break counts as zero.
    pub fn minutes(self) -> i64 {
        match self {
            BreakEntry::Unset => 0,
            BreakEntry::Minutes(m) => i64::from(m),
        }
    }

    /// Editable minute count for a stored break total, e.g. `1:30` -> `90`.
    pub fn from_clock(duration: ClockDuration) -> TimeResult<Self> {
        u32::try_from(clock_to_minutes(duration))
            .map(BreakEntry::Minutes)
            .map_err(|_| TimeError::InvalidBreakInput(duration.to_string()))
    }

    /// Stored break total for this entry, e.g. `90` -> `1:30`, `---` -> `0:00`.
    pub fn to_clock(self) -> ClockDuration {
        minutes_to_clock(self.minutes())
    }
}

impl fmt::Display for BreakEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEntry::Unset => f.write_str(UNSET_BREAK),
            BreakEntry::Minutes(m) => write!(f, "{}", m),
        }
    }
}

impl FromStr for BreakEntry {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        if s.is_empty() || s == UNSET_BREAK {
            return Ok(BreakEntry::Unset);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::InvalidBreakInput(s.to_string()));
        }
        s.parse::<u32>()
            .map(BreakEntry::Minutes)
            .map_err(|_| TimeError::InvalidBreakInput(s.to_string()))
    }
}

/// Wrapped elapsed time between two instants.
///
/// Whole minutes of `end - start` with the hour field taken modulo 24, so a
/// span of a day or more loses its whole days. Stored totals produced by
/// clocking out have always used this rule; use [`elapsed_unwrapped`] for the
/// true duration.
pub fn elapsed(start: DateTime<Utc>, end: DateTime<Utc>) -> ClockDuration {
    ClockDuration::wrapped((end - start).num_minutes())
}

/// Whole minutes of `end - start` with no wrap.
pub fn elapsed_unwrapped(start: DateTime<Utc>, end: DateTime<Utc>) -> ClockDuration {
    ClockDuration::from_delta(end - start)
}

/// Subtracts a break from a wrapped shift total.
///
/// The result follows the same modulo-24 hour rule as [`elapsed`] and may
/// be negative when the break is longer than the total.
pub fn subtract_break(total: ClockDuration, brk: ClockDuration) -> ClockDuration {
    ClockDuration::wrapped(total.total_minutes() - brk.total_minutes())
}

pub fn humanize(duration: ClockDuration) -> String {
    duration.humanize()
}

pub fn format_clock_duration(duration: ClockDuration) -> String {
    duration.to_string()
}

/// True duration between two wall-clock points minus a break.
///
/// Unlike [`elapsed`], multi-day spans are kept whole: Wednesday 1:18 PM to
/// Friday 1:18 PM is `48:00`. A result below zero is returned as a negative
/// duration.
pub fn total_between(start: NaiveDateTime, end: NaiveDateTime, brk: BreakEntry) -> ClockDuration {
    ClockDuration::from_delta(end - start) - minutes_to_clock(brk.minutes())
}

/// [`total_between`] over display labels such as `"Wed, Jan 25"` and `"1:18 PM"`.
///
/// The labels carry no year; both points are placed in [`SYNTHETIC_YEAR`]
/// so only their distance matters.
pub fn total_between_labels(
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
    brk: &str,
) -> TimeResult<ClockDuration> {
    let start = parse_wall_point(start_date, start_time)?;
    let end = parse_wall_point(end_date, end_time)?;
    Ok(total_between(start, end, brk.parse()?))
}

/// Parses a `"Wed, Jan 25"` / `"1:18 PM"` label pair in [`SYNTHETIC_YEAR`].
pub fn parse_wall_point(date_label: &str, time_label: &str) -> TimeResult<NaiveDateTime> {
    let month_day = date_label.split_once(", ").map_or(date_label, |(_, rest)| rest);
    let composed = format!("{} {} {}", SYNTHETIC_YEAR, month_day, time_label);
    NaiveDateTime::parse_from_str(&composed, "%Y %b %d %I:%M %p")
        .map_err(|_| TimeError::parse(&format!("{} {}", date_label, time_label), "a point like 'Wed, Jan 25 1:18 PM'"))
}

pub fn minutes_to_clock(minutes: i64) -> ClockDuration {
    ClockDuration::from_minutes(minutes)
}

pub fn clock_to_minutes(duration: ClockDuration) -> i64 {
    duration.total_minutes()
}

/// Drops seconds and sub-seconds; session timestamps are minute-resolution.
pub fn truncate_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

pub fn parse_timestamp(stamp: &str) -> TimeResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TimeError::parse(stamp, "a timestamp like 2023.01.22.09:05 AM"))
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// [`elapsed`] over two session timestamps.
pub fn elapsed_between(start: &str, end: &str) -> TimeResult<ClockDuration> {
    Ok(elapsed(parse_timestamp(start)?, parse_timestamp(end)?))
}

/// Renders a UTC session timestamp as `h:mm a` in `zone`.
pub fn display_time_in_zone(stamp: &str, zone: Tz) -> TimeResult<String> {
    let instant = parse_timestamp(stamp)?;
    Ok(instant.with_timezone(&zone).format(CLOCK_TIME_FORMAT).to_string())
}
