//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game
//! is discrete per keypress, so there is no held-key repeat handling.

pub mod map;

pub use map::{handle_key_event, should_quit};
