//! Stored shift records and their zone conversions.
//!
//! A [`Shift`] is kept in UTC with its date as `yyyy.MM.dd` and its span as
//! two 12-hour wall times. An end time earlier than the start time means the
//! shift ends on the next day.

use crate::libs::error::{TimeError, TimeResult};
use crate::libs::time_math::{ClockDuration, CLOCK_TIME_FORMAT};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Stored shift date layout, e.g. `2023.01.25`.
pub const DATE_FORMAT: &str = "%Y.%m.%d";

const SPAN_SEPARATOR: &str = " - ";
const SPAN_TIME_PARSE: &str = "%I:%M %p";

/// Start and end wall-clock times of a shift, e.g. `9:00 AM - 5:30 PM`.
///
/// An end earlier than the start means the shift ran past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSpan {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftSpan {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        ShiftSpan { start, end }
    }

    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for ShiftSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.format(CLOCK_TIME_FORMAT),
            SPAN_SEPARATOR,
            self.end.format(CLOCK_TIME_FORMAT)
        )
    }
}

impl FromStr for ShiftSpan {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        const EXPECTED: &str = "a span like '9:00 AM - 5:30 PM'";
        let (start, end) = s.split_once(SPAN_SEPARATOR).ok_or_else(|| TimeError::parse(s, EXPECTED))?;
        let parse = |t: &str| NaiveTime::parse_from_str(t.trim(), SPAN_TIME_PARSE).map_err(|_| TimeError::parse(s, EXPECTED));
        Ok(ShiftSpan::new(parse(start)?, parse(end)?))
    }
}

/// A completed shift as it is stored: date and span in UTC wall-clock terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub span: ShiftSpan,
    pub break_total: ClockDuration,
    pub shift_total: ClockDuration,
}

impl Shift {
    pub fn new(date: NaiveDate, span: ShiftSpan, break_total: ClockDuration, shift_total: ClockDuration) -> Self {
        Shift {
            id: None,
            date,
            span,
            break_total,
            shift_total,
        }
    }

    /// Rebuilds a shift from its stored text columns.
    pub fn from_stored(id: i64, date: &str, span: &str, break_total: &str, shift_total: &str) -> TimeResult<Self> {
        Ok(Shift {
            id: Some(id),
            date: parse_date(date)?,
            span: span.parse()?,
            break_total: break_total.parse()?,
            shift_total: shift_total.parse()?,
        })
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn start_at(&self) -> NaiveDateTime {
        self.date.and_time(self.span.start)
    }

    /// End point; the day after `date` when the span crosses midnight.
    pub fn end_at(&self) -> TimeResult<NaiveDateTime> {
        let end_date = if self.span.is_overnight() {
            self.date.checked_add_days(Days::new(1)).ok_or(TimeError::OutOfRange)?
        } else {
            self.date
        };
        Ok(end_date.and_time(self.span.end))
    }

    /// Re-expresses the date and span from `from` wall-clock time in `to`.
    ///
    /// Totals are durations and stay as they are.
    pub fn convert_zone(&self, from: Tz, to: Tz) -> TimeResult<Shift> {
        let start = localize(from, self.start_at())?.with_timezone(&to);
        let end = localize(from, self.end_at()?)?.with_timezone(&to);
        Ok(Shift {
            id: self.id,
            date: start.date_naive(),
            span: ShiftSpan::new(start.time(), end.time()),
            break_total: self.break_total,
            shift_total: self.shift_total,
        })
    }

    /// Stored shift as seen from `zone`.
    pub fn to_display(&self, zone: Tz) -> TimeResult<Shift> {
        self.convert_zone(Tz::UTC, zone)
    }

    /// Shift entered in `zone`, converted for storage.
    pub fn to_canonical(&self, zone: Tz) -> TimeResult<Shift> {
        self.convert_zone(zone, Tz::UTC)
    }
}

pub fn parse_date(s: &str) -> TimeResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| TimeError::parse(s, "a date like 2023.01.25"))
}

/// Pins a wall-clock point to `zone`.
///
/// Repeated times resolve to the earlier offset; skipped times are an error.
pub fn localize(zone: Tz, naive: NaiveDateTime) -> TimeResult<DateTime<Tz>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TimeError::NonexistentLocalTime {
            timestamp: naive.format("%Y-%m-%d %H:%M").to_string(),
            zone: zone.name().to_string(),
        })
}
