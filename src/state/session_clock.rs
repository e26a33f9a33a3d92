//! Single-slot owner of the active session and its tick source

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info};

use super::{Clock, Session};
use crate::tasks::session_ticker_task;

/// Result of one tick as seen by a ticker task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session has been started yet
    Idle,
    /// The ticker belongs to a session that has since been replaced
    Superseded,
    /// The session is still counting down
    Running(Session),
    /// The session has reached zero; no further ticks are needed
    Expired(Session),
}

#[derive(Debug, Default)]
struct Slot {
    session: Option<Session>,
    generation: u64,
    ticker: Option<JoinHandle<()>>,
}

/// Owns the one active session, recomputes it on a fixed cadence and
/// publishes every change to subscribers
#[derive(Debug)]
pub struct SessionClock {
    clock: Arc<dyn Clock>,
    slot: Mutex<Slot>,
    session_tx: watch::Sender<Option<Session>>,
}

impl SessionClock {
    /// Create a clock holder with no session yet
    pub fn create(clock: Arc<dyn Clock>) -> Arc<Self> {
        let (session_tx, _) = watch::channel(None);
        Arc::new(Self {
            clock,
            slot: Mutex::new(Slot::default()),
            session_tx,
        })
    }

    /// Start a fresh session, replacing any existing one.
    ///
    /// The previous session's ticker is aborted before the new one is spawned,
    /// so at most one tick source is ever live. Must be called inside a tokio
    /// runtime.
    pub fn start(self: &Arc<Self>) -> Session {
        let session = Session::begin(self.clock.now());

        let mut slot = self.slot();
        if let Some(previous) = slot.ticker.take() {
            previous.abort();
            debug!("Aborted ticker for session generation {}", slot.generation);
        }

        slot.generation += 1;
        let generation = slot.generation;
        slot.session = Some(session);
        slot.ticker = Some(tokio::spawn(session_ticker_task(Arc::downgrade(self), generation)));
        self.session_tx.send_replace(Some(session));

        info!(
            "Session {} started at {}, ends at {}",
            generation,
            session.start_time().format("%H:%M:%S"),
            session.end_time().format("%H:%M:%S"),
        );
        session
    }

    /// Recompute the remaining time of the current session.
    ///
    /// Returns `None` if nothing has been started. Ticking an expired session is
    /// a no-op that returns it unchanged.
    pub fn tick(&self) -> Option<Session> {
        match self.advance(None) {
            TickOutcome::Running(session) | TickOutcome::Expired(session) => Some(session),
            TickOutcome::Idle | TickOutcome::Superseded => None,
        }
    }

    /// Tick on behalf of the ticker spawned for `generation`
    pub(crate) fn tick_generation(&self, generation: u64) -> TickOutcome {
        self.advance(Some(generation))
    }

    fn advance(&self, generation: Option<u64>) -> TickOutcome {
        let now = self.clock.now();
        let mut slot = self.slot();

        if generation.is_some_and(|g| g != slot.generation) {
            return TickOutcome::Superseded;
        }

        let Some(current) = slot.session else {
            return TickOutcome::Idle;
        };
        if current.is_expired() {
            return TickOutcome::Expired(current);
        }

        let updated = current.recompute(now);
        slot.session = Some(updated);
        self.session_tx.send_replace(Some(updated));

        if !updated.is_expired() {
            debug!("Session {} tick: {}s left", slot.generation, updated.time_left());
            return TickOutcome::Running(updated);
        }

        info!("Session {} finished", slot.generation);
        if let Some(ticker) = slot.ticker.take() {
            // The ticker itself exits on the Expired outcome; only stop it here
            // when the final tick came from outside.
            if generation.is_none() {
                ticker.abort();
            }
        }
        TickOutcome::Expired(updated)
    }

    /// Progress of the current session, 0 when nothing has started
    pub fn current_progress(&self) -> u8 {
        self.current().map_or(0, |session| session.progress())
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Option<Session> {
        self.slot().session
    }

    /// Number of sessions started so far
    pub fn generation(&self) -> u64 {
        self.slot().generation
    }

    /// Check if a tick source is live for the current session
    pub fn is_ticking(&self) -> bool {
        self.slot()
            .ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    /// Subscribe to session updates; the receiver keeps working across restarts
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session_tx.subscribe()
    }

    /// Stop ticking. The last session snapshot stays readable.
    pub fn dispose(&self) {
        if let Some(ticker) = self.slot().ticker.take() {
            ticker.abort();
            info!("Session clock disposed, ticker stopped");
        }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for SessionClock {
    fn drop(&mut self) {
        let slot = self.slot.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(ticker) = slot.ticker.take() {
            ticker.abort();
        }
    }
}
