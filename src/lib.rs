//! Session Timer - a fixed five-minute work session countdown
//! 
//! This library provides the session clock (start, tick, progress), the view
//! that renders it, and the terminal and HTTP surfaces that drive restarts.

pub mod config;
pub mod state;
pub mod view;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Session, SessionClock};
pub use view::{DisplayFrame, SessionView};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
