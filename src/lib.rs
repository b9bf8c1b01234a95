//! # shiftlog
//!
//! Clock in and out of work shifts, take breaks, and browse the recorded
//! shifts by week, month or year from the terminal.
//!
//! ## Layout
//!
//! - [`libs::time_math`] duration arithmetic, timestamp codec and formatting
//! - [`libs::shift_window`] week/month/year windows, filtering and totals
//! - [`libs::shift`] and [`libs::draft`] the stored record and its edit form
//! - [`libs::session`] the running clock persisted between invocations
//! - [`db`] SQLite storage of completed shifts
//! - [`commands`] the `shiftlog` command line
//!
//! Stored dates and spans are UTC wall-clock values; they are converted to
//! the configured display zone only when shown or entered.

pub mod commands;
pub mod db;
pub mod libs;
