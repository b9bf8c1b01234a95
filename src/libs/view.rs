//! Terminal tables.

use super::shift::Shift;
use super::time_math::ClockDuration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Shifts as seen in the display zone, with the window total as the last row.
    pub fn shifts(shifts: &[Shift], total: ClockDuration) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "SHIFT", "BREAK", "TOTAL"]);
        for shift in shifts {
            table.add_row(row![
                shift.id.unwrap_or(0),
                shift.date_label(),
                shift.span,
                shift.break_total,
                shift.shift_total
            ]);
        }
        table.add_row(row!["", "", "", "", total.humanize()]);
        table.printstd();
    }

    pub fn status(started: &str, on_break: bool, counter: ClockDuration, break_counter: ClockDuration) {
        let mut table = Table::new();

        table.add_row(row!["CLOCKED IN", "ON BREAK", "WORKED", "BREAK"]);
        table.add_row(row![
            started,
            if on_break { "yes" } else { "no" },
            counter.humanize(),
            break_counter.humanize()
        ]);
        table.printstd();
    }
}
