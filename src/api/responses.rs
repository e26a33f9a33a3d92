//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::view::DisplayFrame;

/// Response for the restart endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub display: DisplayFrame,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, display: DisplayFrame) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            display,
        }
    }

    /// Create a response for a freshly started session
    pub fn restarted(display: DisplayFrame) -> Self {
        Self::new("restarted".to_string(), "Session restarted".to_string(), display)
    }
}

/// Current display plus countdown details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub display: DisplayFrame,
    pub time_left_seconds: Option<u64>,
    /// Remaining time as MM:SS
    pub remaining: Option<String>,
    pub ticking: bool,
    pub uptime: String,
    pub restarts: u64,
    pub last_restart_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
