use crate::db::shifts::Shifts;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::shift_window::{sum_totals, Granularity, LogNavigator};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Days, Utc};
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(short, long, value_enum, default_value_t = Granularity::Week)]
    tab: Granularity,

    /// Windows to step from the current one: -1 is the previous, 1 the next
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i32,
}

pub fn cmd(args: LogArgs) -> Result<()> {
    let config = Config::read()?;
    let zone = config.zone()?;

    let mut navigator = LogNavigator::new(&Utc::now().with_timezone(&zone), config.start_of_week)?;
    navigator.select_tab(args.tab)?;
    navigator.navigate_by(args.offset)?;

    let visible = navigator.visible_in(&Shifts::new()?.list_all()?, zone)?;

    let heading = match navigator.granularity() {
        Granularity::All => Message::LogAllHeader(zone.name().to_string()),
        granularity => {
            let window = navigator.window();
            let last_day = window.end.checked_sub_days(Days::new(1)).unwrap_or(window.end);
            Message::LogWindowHeader(
                granularity.to_string(),
                window.start.format("%b %-d, %Y").to_string(),
                last_day.format("%b %-d, %Y").to_string(),
            )
        }
    };
    msg_print!(heading, true);

    if visible.is_empty() {
        msg_info!(Message::NoShiftsInWindow);
        return Ok(());
    }

    View::shifts(&visible, sum_totals(&visible)?);
    Ok(())
}
