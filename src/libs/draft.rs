//! Editable form state for adding or changing a shift.
//!
//! A draft holds start and end points in the viewer's zone together with
//! the typed break. Every change recomputes the net total with
//! [`total_between`], so the total always reflects the current fields.

use crate::libs::error::{TimeError, TimeResult};
use crate::libs::shift::{Shift, ShiftSpan};
use crate::libs::time_math::{total_between, BreakEntry, ClockDuration};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Label layout for draft dates, e.g. `Wed, Jan 25`.
pub const DATE_LABEL_FORMAT: &str = "%a, %b %-d";

/// Fields entered on the add or edit form. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftChanges {
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    pub break_input: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDraft {
    id: Option<i64>,
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_entry: BreakEntry,
    total: ClockDuration,
}

impl ShiftDraft {
    /// Create draft with start and end both at `now`.
    pub fn new_at<Z: TimeZone>(now: &DateTime<Z>) -> Self {
        let local = now.naive_local();
        let local = local
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(local);
        ShiftDraft {
            id: None,
            start: local,
            end: local,
            break_entry: BreakEntry::Unset,
            total: ClockDuration::ZERO,
        }
    }

    /// Edit draft for a stored shift, shown in `zone`.
    ///
    /// The end date comes from start + break + total. The stored total is
    /// kept until a field changes.
    pub fn from_shift(shift: &Shift, zone: Tz) -> TimeResult<Self> {
        let display = shift.to_display(zone)?;
        let start = display.start_at();
        let gross = shift
            .shift_total
            .checked_add(shift.break_total)
            .ok_or(TimeError::OutOfRange)?;
        let end_date = start
            .checked_add_signed(gross.to_delta()?)
            .ok_or(TimeError::OutOfRange)?
            .date();
        Ok(ShiftDraft {
            id: shift.id,
            start,
            end: end_date.and_time(display.span.end),
            break_entry: BreakEntry::from_clock(shift.break_total)?,
            total: shift.shift_total,
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn break_entry(&self) -> BreakEntry {
        self.break_entry
    }

    pub fn total(&self) -> ClockDuration {
        self.total
    }

    pub fn start_date_label(&self) -> String {
        self.start.format(DATE_LABEL_FORMAT).to_string()
    }

    pub fn end_date_label(&self) -> String {
        self.end.format(DATE_LABEL_FORMAT).to_string()
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start = date.and_time(self.start.time());
        self.recompute();
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end = date.and_time(self.end.time());
        self.recompute();
    }

    pub fn set_start_time(&mut self, time: NaiveTime) {
        self.start = self.start.date().and_time(truncate_time(time));
        self.recompute();
    }

    pub fn set_end_time(&mut self, time: NaiveTime) {
        self.end = self.end.date().and_time(truncate_time(time));
        self.recompute();
    }

    /// Applies typed break text. On error the previous break is kept.
    pub fn set_break_input(&mut self, input: &str) -> TimeResult<()> {
        self.break_entry = input.trim().parse()?;
        self.recompute();
        Ok(())
    }

    /// Moves the start to `date` and the end by the same number of days.
    pub fn move_start_date(&mut self, date: NaiveDate) -> TimeResult<()> {
        let moved = date.signed_duration_since(self.start.date());
        self.end = self.end.checked_add_signed(moved).ok_or(TimeError::OutOfRange)?;
        self.set_start_date(date);
        Ok(())
    }

    /// Applies form changes in form order.
    ///
    /// A start date given without an end date carries the end along, so the
    /// span keeps its length. Stops at the first rejected field.
    pub fn apply(&mut self, changes: &DraftChanges) -> TimeResult<()> {
        if let Some(date) = changes.start_date {
            if changes.end_date.is_some() {
                self.set_start_date(date);
            } else {
                self.move_start_date(date)?;
            }
        }
        if let Some(time) = changes.start_time {
            self.set_start_time(time);
        }
        if let Some(date) = changes.end_date {
            self.set_end_date(date);
        }
        if let Some(time) = changes.end_time {
            self.set_end_time(time);
        }
        if let Some(input) = &changes.break_input {
            self.set_break_input(input)?;
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.total = total_between(self.start, self.end, self.break_entry);
    }

    /// Shift for storage; the draft's fields are read as `zone` wall time.
    pub fn into_shift(&self, zone: Tz) -> TimeResult<Shift> {
        let local = Shift {
            id: self.id,
            date: self.start.date(),
            span: ShiftSpan::new(self.start.time(), self.end.time()),
            break_total: self.break_entry.to_clock(),
            shift_total: self.total,
        };
        local.to_canonical(zone)
    }
}

fn truncate_time(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

