//! State management module
//! 
//! This module contains the session model, the clock that owns it and the
//! shared application state handed to the outer surfaces.

pub mod app_state;
pub mod clock;
pub mod session;
pub mod session_clock;

// Re-export main types
pub use app_state::AppState;
pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{progress_for, session_duration, Session, SESSION_DURATION_SECS};
pub use session_clock::{SessionClock, TickOutcome};
