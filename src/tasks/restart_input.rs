//! Restart control read from the terminal

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Restart the session for every line read from stdin (the RESET ULANG control)
pub async fn restart_input_task(state: Arc<AppState>) {
    info!("Press Enter to restart the session");
    listen_for_restarts(state, BufReader::new(tokio::io::stdin())).await;
}

/// Restart once per input line until end of input
pub async fn listen_for_restarts<R>(state: Arc<AppState>, input: R)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(_)) => {
                state.restart("terminal");
            }
            Ok(None) => {
                debug!("Input closed, terminal restart control disabled");
                break;
            }
            Err(e) => {
                warn!("Failed to read restart input: {}", e);
                break;
            }
        }
    }
}
