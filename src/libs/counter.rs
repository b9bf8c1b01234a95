//! Cancellable once-a-minute tick loop behind `status --watch`.

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Refresh period of the live status counter.
pub const COUNTER_TICK: Duration = Duration::from_secs(60);

/// Calls `on_tick` right away and then once per `tick` until `cancel` fires.
///
/// Ticks missed while the process was suspended are skipped, not replayed.
/// Returns the number of ticks delivered.
pub async fn run_counter<F>(tick: Duration, cancel: CancellationToken, mut on_tick: F) -> usize
where
    F: FnMut(),
{
    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut delivered = 0;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Counter stopped after {} ticks", delivered);
                break;
            }
            _ = ticker.tick() => {
                on_tick();
                delivered += 1;
            }
        }
    }

    delivered
}
