//! Session Timer - a fixed five-minute work session countdown
//! 
//! This is the main entry point for the session-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use session_timer::{
    config::Config,
    state::{AppState, SessionClock, SystemClock, SESSION_DURATION_SECS},
    api::create_router,
    tasks::{restart_input_task, session_display_task},
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they don't interleave with the display on stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("session_timer={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting session-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: duration={}s, format={:?}, serve={}",
          SESSION_DURATION_SECS, config.format, config.serve);

    let session_clock = SessionClock::create(Arc::new(SystemClock));
    let state = Arc::new(AppState::new(Arc::clone(&session_clock)));

    // First session begins at program start
    session_clock.start();

    let display_state = Arc::clone(&state);
    let display_task = tokio::spawn(session_display_task(display_state, config.format));

    if !config.no_input {
        tokio::spawn(restart_input_task(Arc::clone(&state)));
    }

    if config.serve {
        let addr = config.address();
        let listener = TcpListener::bind(&addr).await?;
        let app = create_router(Arc::clone(&state));

        info!("Server running on http://{}", addr);
        info!("Endpoints:");
        info!("  POST /reset  - Restart the session");
        info!("  GET  /status - Current display and countdown");
        info!("  GET  /health - Health check");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Server error: {}", e);
            }
        });
    }

    shutdown_signal().await;
    info!("Shutdown signal received");

    display_task.abort();
    session_clock.dispose();

    info!("Shutdown complete");
    // A pending stdin read cannot be cancelled and would hold up runtime shutdown
    std::process::exit(0)
}
