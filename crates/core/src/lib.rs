//! Core piece-management logic - pure, deterministic, and testable
//!
//! This crate contains the two containers, the transfer operations between
//! them, and the session bookkeeping. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every operation returns a value or a typed error
//! - **Portable**: Can run under any front end (terminal, headless)
//! - **Allocation-free**: All storage is inline and sized at compile time
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO of upcoming pieces
//! - [`stack`]: fixed-capacity LIFO of reserved pieces
//! - [`transfer`]: all-or-nothing operations spanning both containers
//! - [`rng`]: seeded piece generation, deterministic per piece id
//! - [`session`]: queue + stack + generator with the replenishment policy
//! - [`error`]: typed failure conditions for every operation
//!
//! # Contracts
//!
//! Every mutating operation either fully succeeds or fails without touching
//! either container. Capacity overflows, empty-container accesses and
//! out-of-range peeks are ordinary [`error`] values, never panics.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{CommandOutcome, GameSession};
//! use tetris_stack_core::types::Command;
//!
//! // Start a session; the next queue is pre-filled to capacity.
//! let mut session = GameSession::new(12345);
//! assert!(session.queue().is_full());
//!
//! // Play the front piece; the queue refills itself.
//! let played = session.play().unwrap();
//! assert_eq!(played.id, 0);
//! assert!(session.queue().is_full());
//!
//! // Commands fold errors into outcomes a front end can display.
//! let outcome = session.apply(Command::Recall);
//! assert!(matches!(outcome, CommandOutcome::Rejected { .. }));
//! ```

pub mod error;
pub mod queue;
pub mod rng;
pub mod session;
pub mod stack;
pub mod transfer;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::{QueueError, StackError, TransferError};
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::{CommandOutcome, GameSession, NextQueue, ReserveStack};
pub use stack::PieceStack;
