//! Piece-stack trainer (workspace facade crate).
//!
//! This package keeps the `tetris_stack::{core,input,term,types}` public API
//! in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;
