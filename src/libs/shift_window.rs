//! Week, month and year windows for browsing recorded shifts.
//!
//! A window is a half-open date range `[start, end)`. Windows are computed
//! from a reference instant in the viewer's zone and a configured first day
//! of the week, and can be stepped back and forward one unit at a time.
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use shiftlog::libs::shift_window::{start_of_week_on, Direction, Granularity, TimeWindow};
//!
//! let sunday = NaiveDate::from_ymd_opt(2023, 9, 10).unwrap();
//! let week = TimeWindow::new(start_of_week_on(sunday, Weekday::Sun), sunday + chrono::Days::new(7));
//! let previous = week.shift(Granularity::Week, Direction::Back)?;
//! assert_eq!(previous.start, NaiveDate::from_ymd_opt(2023, 9, 3).unwrap());
//! # Ok::<(), shiftlog::libs::error::TimeError>(())
//! ```

use crate::libs::error::{TimeError, TimeResult};
use crate::libs::shift::Shift;
use crate::libs::time_math::ClockDuration;
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Weekday};
use chrono_tz::Tz;
use clap::ValueEnum;
use std::fmt;

/// Bucketing unit of the shift log.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    #[default]
    Week,
    Month,
    Year,
    All,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// Half-open date range; `end` is exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Unbounded window used by the `All` tab.
    pub const ALL: TimeWindow = TimeWindow {
        start: NaiveDate::MIN,
        end: NaiveDate::MAX,
    };

    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        TimeWindow { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Moves both bounds by one unit of `granularity`.
    ///
    /// `All` has no unit and yields [`TimeError::UnsupportedNavigation`].
    pub fn shift(self, granularity: Granularity, direction: Direction) -> TimeResult<Self> {
        let step = |date: NaiveDate| -> Option<NaiveDate> {
            match (granularity, direction) {
                (Granularity::Week, Direction::Forward) => date.checked_add_days(Days::new(7)),
                (Granularity::Week, Direction::Back) => date.checked_sub_days(Days::new(7)),
                (Granularity::Month, Direction::Forward) => date.checked_add_months(Months::new(1)),
                (Granularity::Month, Direction::Back) => date.checked_sub_months(Months::new(1)),
                (Granularity::Year, Direction::Forward) => date.checked_add_months(Months::new(12)),
                (Granularity::Year, Direction::Back) => date.checked_sub_months(Months::new(12)),
                (Granularity::All, _) => None,
            }
        };

        if granularity == Granularity::All {
            return Err(TimeError::UnsupportedNavigation(granularity));
        }

        Ok(TimeWindow {
            start: step(self.start).ok_or(TimeError::OutOfRange)?,
            end: step(self.end).ok_or(TimeError::OutOfRange)?,
        })
    }
}

/// Most recent date on or before `today` that falls on `week_start`.
pub fn start_of_week_on(today: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = (7 + today.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    today.checked_sub_days(Days::new(u64::from(back))).unwrap_or(NaiveDate::MIN)
}

pub fn start_of_month_on(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

pub fn start_of_year_on(today: NaiveDate) -> NaiveDate {
    today.with_ordinal(1).unwrap_or(today)
}

pub fn start_of_week<Z: TimeZone>(now: &DateTime<Z>, week_start: Weekday) -> NaiveDate {
    start_of_week_on(now.date_naive(), week_start)
}

pub fn start_of_month<Z: TimeZone>(now: &DateTime<Z>) -> NaiveDate {
    start_of_month_on(now.date_naive())
}

pub fn start_of_year<Z: TimeZone>(now: &DateTime<Z>) -> NaiveDate {
    start_of_year_on(now.date_naive())
}

/// Window of `granularity` that contains `today`.
pub fn window_on(granularity: Granularity, today: NaiveDate, week_start: Weekday) -> TimeResult<TimeWindow> {
    let (start, end) = match granularity {
        Granularity::Week => {
            let start = start_of_week_on(today, week_start);
            (start, start.checked_add_days(Days::new(7)))
        }
        Granularity::Month => {
            let start = start_of_month_on(today);
            (start, start.checked_add_months(Months::new(1)))
        }
        Granularity::Year => {
            let start = start_of_year_on(today);
            (start, start.checked_add_months(Months::new(12)))
        }
        Granularity::All => return Ok(TimeWindow::ALL),
    };
    Ok(TimeWindow::new(start, end.ok_or(TimeError::OutOfRange)?))
}

/// Window of `granularity` that contains `now`'s date in `now`'s zone.
pub fn window<Z: TimeZone>(granularity: Granularity, now: &DateTime<Z>, week_start: Weekday) -> TimeResult<TimeWindow> {
    window_on(granularity, now.date_naive(), week_start)
}

/// Shifts whose date lies in `window`, in input order.
pub fn filter(shifts: &[Shift], window: TimeWindow) -> Vec<Shift> {
    shifts.iter().filter(|shift| window.contains(shift.date)).cloned().collect()
}

/// Net total of `shifts`.
///
/// Totals are added as signed values, so `-1:15` counts as minus 75 minutes.
/// This is not the legacy per-field sum, which added hour and minute parts
/// separately and read `-1:15` as minus 45 minutes.
pub fn sum_totals(shifts: &[Shift]) -> TimeResult<ClockDuration> {
    shifts
        .iter()
        .try_fold(ClockDuration::ZERO, |acc, shift| acc.checked_add(shift.shift_total))
        .ok_or(TimeError::OutOfRange)
}

/// Tab and window state of the shift log.
///
/// Starts on the `Week` tab at the window containing today. Selecting a tab
/// recomputes the window around today and resets the offset; navigating
/// steps the current window and is ignored on the `All` tab.
#[derive(Debug, Clone)]
pub struct LogNavigator {
    today: NaiveDate,
    week_start: Weekday,
    granularity: Granularity,
    window: TimeWindow,
    offset: i32,
}

impl LogNavigator {
    pub fn new<Z: TimeZone>(now: &DateTime<Z>, week_start: Weekday) -> TimeResult<Self> {
        let today = now.date_naive();
        Ok(LogNavigator {
            today,
            week_start,
            granularity: Granularity::Week,
            window: window_on(Granularity::Week, today, week_start)?,
            offset: 0,
        })
    }

    pub fn select_tab(&mut self, granularity: Granularity) -> TimeResult<()> {
        self.window = window_on(granularity, self.today, self.week_start)?;
        self.granularity = granularity;
        self.offset = 0;
        Ok(())
    }

    pub fn navigate(&mut self, direction: Direction) -> TimeResult<()> {
        if self.granularity == Granularity::All {
            return Ok(());
        }
        self.window = self.window.shift(self.granularity, direction)?;
        self.offset += match direction {
            Direction::Back => -1,
            Direction::Forward => 1,
        };
        Ok(())
    }

    /// Steps `offset` windows: negative goes back, positive forward.
    pub fn navigate_by(&mut self, offset: i32) -> TimeResult<()> {
        let direction = if offset < 0 { Direction::Back } else { Direction::Forward };
        for _ in 0..offset.unsigned_abs() {
            self.navigate(direction)?;
        }
        Ok(())
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn visible(&self, shifts: &[Shift]) -> Vec<Shift> {
        filter(shifts, self.window)
    }

    /// Stored shifts re-expressed in `zone`, then filtered by the window.
    ///
    /// Window membership follows the display date, so a shift stored on
    /// one UTC day may land in the previous local window.
    pub fn visible_in(&self, shifts: &[Shift], zone: Tz) -> TimeResult<Vec<Shift>> {
        let displayed = shifts
            .iter()
            .map(|shift| shift.to_display(zone))
            .collect::<TimeResult<Vec<Shift>>>()?;
        Ok(self.visible(&displayed))
    }
}
