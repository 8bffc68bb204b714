//! Terminal input module (session-facing).
//!
//! Intentionally independent of any UI framework: it only maps `crossterm`
//! key events into [`crate::types::Command`] values for the driver loop.

pub mod map;

pub use tetris_stack_types as types;

pub use map::{handle_key_event, should_quit};
