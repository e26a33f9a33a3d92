//! Presentation module
//! 
//! Turns session snapshots into display frames and draws them.

pub mod frame;
pub mod session_view;
pub mod time_card;

// Re-export main types
pub use frame::{DisplayFrame, OutputFormat};
pub use session_view::SessionView;
pub use time_card::TimeCard;
