//! Main application state management

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::SessionClock;
use crate::view::{DisplayFrame, SessionView};

/// Shared state handed to the terminal and HTTP surfaces
#[derive(Debug)]
pub struct AppState {
    /// The single session owner
    pub session_clock: Arc<SessionClock>,
    /// Presentation over the session clock
    pub view: SessionView,
    /// Process metadata
    pub start_time: Instant,
    /// Restart tracking
    restart_count: Mutex<u64>,
    last_restart_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create the application state around an existing session clock
    pub fn new(session_clock: Arc<SessionClock>) -> Self {
        Self {
            view: SessionView::new(Arc::clone(&session_clock)),
            session_clock,
            start_time: Instant::now(),
            restart_count: Mutex::new(0),
            last_restart_time: Mutex::new(None),
        }
    }

    /// Handle a restart request from any surface and return the fresh frame
    pub fn restart(&self, source: &str) -> DisplayFrame {
        info!("Restart requested via {}", source);
        let frame = self.view.on_restart_requested();

        *self.restart_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        *self.last_restart_time.lock().unwrap_or_else(PoisonError::into_inner) = Some(Utc::now());

        frame
    }

    /// Render the current session
    pub fn frame(&self) -> DisplayFrame {
        SessionView::render(self.session_clock.current().as_ref())
    }

    /// Calculate process uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get restart count and the time of the last restart
    pub fn get_last_restart(&self) -> (u64, Option<DateTime<Utc>>) {
        let count = *self.restart_count.lock().unwrap_or_else(PoisonError::into_inner);
        let time = *self.last_restart_time.lock().unwrap_or_else(PoisonError::into_inner);
        (count, time)
    }
}
