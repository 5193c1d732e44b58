//! Interactive TUI interface
//!
//! Full-screen board driven by crossterm input and drawn with ratatui.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use rendering::BoardGeometry;
