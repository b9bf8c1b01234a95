//! Text for every [`Message`].
//!
//! All user-facing wording lives in this one match so commands only pick a
//! variant and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === CLOCK MESSAGES ===
            Message::ClockedIn(time) => format!("Clocked in at {}", time),
            Message::ClockedOut(total, brk) => format!("Clocked out. Worked {} with {} of breaks", total, brk),
            Message::NotClockedIn => "Not clocked in".to_string(),
            Message::BreakStarted => "Break started".to_string(),
            Message::BreakEnded(taken, total) => format!("Break ended after {} ({} in total)", taken, total),
            Message::WatchingCounters(time) => format!("Shift started at {}. Press Ctrl-C to stop watching", time),
            Message::CounterLine(worked, brk) => format!("Worked {} | Break {}", worked, brk),

            // === SHIFT MESSAGES ===
            Message::ShiftAdded(id, total) => format!("Shift {} recorded ({})", id, total),
            Message::ShiftUpdated(id, total) => format!("Shift {} updated ({})", id, total),
            Message::NegativeShiftTotal(total) => format!("Shift total is negative ({}), check the start and end", total),
            Message::ShiftDeleted(id) => format!("Shift {} deleted", id),
            Message::ShiftNotFound(id) => format!("Shift {} not found", id),
            Message::ShiftWithoutId => "Shift has not been stored yet".to_string(),
            Message::ConfirmDeleteShift(id) => format!("Delete shift {}?", id),
            Message::InvalidDate(input) => format!("Invalid date '{}', use YYYY-MM-DD or 'today'", input),
            Message::InvalidTime(input) => format!("Invalid time '{}', use HH:MM or h:mm AM", input),

            // === LOG MESSAGES ===
            Message::LogWindowHeader(tab, first, last) => format!("{}: {} - {}", tab, first, last),
            Message::LogAllHeader(zone) => format!("All shifts ({})", zone),
            Message::NoShiftsInWindow => "No shifts in this period".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "Shift log preferences".to_string(),
            Message::ConfigSaved(zone, day) => format!("Preferences saved: {} time, weeks start on {}", zone, day),
            Message::PromptTimeZone => "Time zone (IANA name)".to_string(),
            Message::PromptStartOfWeek => "First day of the week".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingShifts(count, format) => format!("Exporting {} shifts as {}", count, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
