//! Interactive TUI for playing Hangman

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::{key_at, ui};
