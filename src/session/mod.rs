//! Session lifecycle: shared setup plus the TUI and headless run modes.

pub mod headless_mode;
pub mod messages;
pub mod setup;
pub mod tui_mode;

pub use setup::{SessionData, setup_session};
