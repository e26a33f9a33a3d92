//! Terminal display task

use std::{io, sync::Arc};
use tracing::{error, info};

use crate::{state::AppState, view::OutputFormat};

/// Draw every session update to stdout
pub async fn session_display_task(state: Arc<AppState>, format: OutputFormat) {
    info!("Starting display task ({:?} output)", format);

    if let Err(e) = state.view.run(io::stdout(), format).await {
        error!("Display stopped: {}", e);
    }
}
