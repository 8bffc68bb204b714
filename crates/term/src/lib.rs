//! Terminal front end for the session driver.
//!
//! Two layers, split so the interesting one stays testable:
//!
//! - [`view`] is pure: session state in, text frame out, no I/O
//! - [`screen`] owns the terminal: raw mode, alternate screen, full redraws

pub mod screen;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use screen::Screen;
pub use view::{outcome_line, queue_line, stack_line, SessionView};
