use crate::libs::config::Config;
use crate::libs::counter::{run_counter, COUNTER_TICK};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::time_math::{display_time_in_zone, format_timestamp};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing::warn;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Keep refreshing the counters every minute until Ctrl-C
    #[arg(short, long)]
    watch: bool,
}

pub async fn cmd(args: StatusArgs) -> Result<()> {
    let zone = Config::read()?.zone()?;
    let session = Session::load()?;

    let Some(start) = session.shift_start() else {
        msg_info!(Message::NotClockedIn);
        return Ok(());
    };
    let started = display_time_in_zone(&format_timestamp(start), zone)?;

    if !args.watch {
        let now = Utc::now();
        View::status(&started, session.is_on_break(), session.counter(now), session.break_counter(now));
        return Ok(());
    }

    msg_print!(Message::WatchingCounters(started));
    let cancel = CancellationToken::new();
    let stop = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
        }
        stop.cancel();
    });

    run_counter(COUNTER_TICK, cancel, || {
        let now = Utc::now();
        msg_print!(Message::CounterLine(
            session.counter(now).humanize(),
            session.break_counter(now).humanize()
        ));
    })
    .await;

    Ok(())
}
