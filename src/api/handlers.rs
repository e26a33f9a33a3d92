//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};
use tracing::info;

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /reset - Start a new session (RESET ULANG)
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let frame = state.restart("http");
    info!("Reset endpoint called - new session ends at {}", frame.end_time);
    Json(ApiResponse::restarted(frame))
}

/// Handle GET /status - Return the current display and countdown
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let session = state.session_clock.current();
    let (restarts, last_restart_time) = state.get_last_restart();

    Json(StatusResponse {
        display: state.frame(),
        time_left_seconds: session.map(|s| s.time_left()),
        remaining: session.map(|s| s.remaining_display()),
        ticking: state.session_clock.is_ticking(),
        uptime: state.get_uptime(),
        restarts,
        last_restart_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
