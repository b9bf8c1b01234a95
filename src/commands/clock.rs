use crate::db::shifts::Shifts;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::time_math::{display_time_in_zone, format_timestamp};
use crate::msg_success;
use anyhow::Result;
use chrono::Utc;
use tracing::debug;

pub fn clock_in() -> Result<()> {
    let zone = Config::read()?.zone()?;
    let mut session = Session::load()?;

    session.clock_in(Utc::now())?;
    session.save()?;

    let started = session.shift_start().map(format_timestamp).unwrap_or_default();
    debug!("Clocked in at {}", started);
    msg_success!(Message::ClockedIn(display_time_in_zone(&started, zone)?));
    Ok(())
}

pub fn clock_out() -> Result<()> {
    let mut session = Session::load()?;

    let shift = session.clock_out(Utc::now())?;
    let stored = Shifts::new()?.insert(&shift)?;
    session.save()?;

    msg_success!(Message::ClockedOut(
        stored.shift_total.humanize(),
        stored.break_total.humanize()
    ));
    Ok(())
}
