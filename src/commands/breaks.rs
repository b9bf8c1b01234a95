use crate::libs::messages::Message;
use crate::libs::session::{BreakChange, Session};
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Utc;

pub fn cmd() -> Result<()> {
    let mut session = Session::load()?;

    let change = session.toggle_break(Utc::now())?;
    session.save()?;

    match change {
        BreakChange::Started => {
            msg_info!(Message::BreakStarted);
        }
        BreakChange::Ended(taken) => {
            msg_success!(Message::BreakEnded(taken.humanize(), session.break_total().humanize()));
        }
    }
    Ok(())
}
