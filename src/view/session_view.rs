//! Session view: renders session snapshots and forwards restarts

use std::{io::Write, sync::Arc};
use tracing::debug;

use super::{
    frame::{INFO_MESSAGE, TIME_PLACEHOLDER},
    DisplayFrame, OutputFormat,
};
use crate::state::{Session, SessionClock};

/// ANSI clear-screen and cursor-home, used before each text redraw
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Read-only presentation over a [`SessionClock`]
#[derive(Debug, Clone)]
pub struct SessionView {
    clock: Arc<SessionClock>,
}

impl SessionView {
    pub fn new(clock: Arc<SessionClock>) -> Self {
        Self { clock }
    }

    /// Build the frame for a session snapshot, or placeholders before the first start
    pub fn render(session: Option<&Session>) -> DisplayFrame {
        match session {
            Some(session) => DisplayFrame {
                start_time: session.start_time().format("%H:%M").to_string(),
                end_time: session.end_time().format("%H:%M").to_string(),
                progress: session.progress(),
                message: INFO_MESSAGE.to_string(),
            },
            None => DisplayFrame {
                start_time: TIME_PLACEHOLDER.to_string(),
                end_time: TIME_PLACEHOLDER.to_string(),
                progress: 0,
                message: INFO_MESSAGE.to_string(),
            },
        }
    }

    /// Start a new session and return its first frame
    pub fn on_restart_requested(&self) -> DisplayFrame {
        let session = self.clock.start();
        Self::render(Some(&session))
    }

    /// Redraw whenever the rendered frame changes.
    ///
    /// Runs until the owning task is cancelled or the clock's sender is gone.
    pub async fn run<W: Write>(&self, mut out: W, format: OutputFormat) -> anyhow::Result<()> {
        let mut session_rx = self.clock.subscribe();
        let mut last_drawn = None;

        loop {
            let session = *session_rx.borrow_and_update();
            let frame = Self::render(session.as_ref());

            // Ticks that leave HH:MM and the percentage unchanged are not redrawn
            if last_drawn.as_ref() != Some(&frame) {
                debug!("Drawing frame at {}%", frame.progress);
                Self::draw(&mut out, &frame, format)?;
                last_drawn = Some(frame);
            }

            if session_rx.changed().await.is_err() {
                return Ok(());
            }
        }
    }

    fn draw<W: Write>(out: &mut W, frame: &DisplayFrame, format: OutputFormat) -> anyhow::Result<()> {
        if format == OutputFormat::Text {
            write!(out, "{}", CLEAR_SCREEN)?;
        }
        writeln!(out, "{}", frame.to_output(format)?)?;
        out.flush()?;
        Ok(())
    }
}
