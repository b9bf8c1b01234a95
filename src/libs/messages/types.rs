/// Every user-facing line the CLI prints.
#[derive(Debug, Clone)]
pub enum Message {
    // === CLOCK MESSAGES ===
    ClockedIn(String),          // start time in the display zone
    ClockedOut(String, String), // net total, break total
    NotClockedIn,
    BreakStarted,
    BreakEnded(String, String), // this break, all breaks
    WatchingCounters(String),   // start time
    CounterLine(String, String),

    // === SHIFT MESSAGES ===
    ShiftAdded(i64, String),
    ShiftUpdated(i64, String),
    NegativeShiftTotal(String),
    ShiftDeleted(i64),
    ShiftNotFound(i64),
    ShiftWithoutId,
    ConfirmDeleteShift(i64),
    InvalidDate(String),
    InvalidTime(String),

    // === LOG MESSAGES ===
    LogWindowHeader(String, String, String), // tab, first day, last day
    LogAllHeader(String),                    // zone
    NoShiftsInWindow,

    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    ConfigSaved(String, String), // zone, first day of week
    PromptTimeZone,
    PromptStartOfWeek,

    // === EXPORT MESSAGES ===
    ExportingShifts(usize, String),
    ExportCompleted(String),

    OperationCancelled,
}
