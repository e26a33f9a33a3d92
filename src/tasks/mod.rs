//! Background tasks module
//! 
//! This module contains the tasks that run alongside the session clock.

pub mod display;
pub mod restart_input;
pub mod session_ticker;

// Re-export main functions
pub use display::session_display_task;
pub use restart_input::restart_input_task;
pub use session_ticker::{session_ticker_task, TICK_INTERVAL};
