//! Periodic tick source for one session

use std::{sync::Weak, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::state::{SessionClock, TickOutcome};

/// Cadence of remaining-time recomputation
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Tick the session started as `generation` once per second.
///
/// Exits when that session expires, when a newer session replaces it, or when
/// the clock itself has been dropped.
pub async fn session_ticker_task(clock: Weak<SessionClock>, generation: u64) {
    debug!("Starting ticker for session generation {}", generation);

    let mut interval = interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; start() already published the full session
    interval.tick().await;

    loop {
        interval.tick().await;

        let Some(clock) = clock.upgrade() else {
            debug!("Session clock dropped, ticker {} exiting", generation);
            break;
        };

        match clock.tick_generation(generation) {
            TickOutcome::Running(_) => {}
            TickOutcome::Expired(_) => {
                debug!("Session generation {} expired, ticker exiting", generation);
                break;
            }
            TickOutcome::Superseded | TickOutcome::Idle => {
                debug!("Session generation {} superseded, ticker exiting", generation);
                break;
            }
        }
    }
}
