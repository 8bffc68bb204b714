//! Error types for container and transfer operations
//!
//! Every failing operation leaves both containers exactly as they were; the
//! driver reports the condition and keeps running. Errors carry the lengths
//! that made the operation impossible so messages stay concrete.

use thiserror::Error;

/// Failure modes of the next-piece queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Enqueue attempted while every slot is occupied.
    #[error("next queue is full")]
    Full,

    /// Dequeue or front peek attempted with nothing queued.
    #[error("next queue is empty")]
    Empty,

    /// Peek offset at or past the number of queued pieces.
    #[error("queue offset {offset} out of range (holding {len})")]
    IndexOutOfRange { offset: usize, len: usize },
}

/// Failure modes of the reserve stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Push attempted while every slot is occupied.
    #[error("reserve stack is full")]
    Full,

    /// Pop or top peek attempted with nothing reserved.
    #[error("reserve stack is empty")]
    Empty,

    /// Peek offset at or past the number of reserved pieces.
    #[error("stack offset {offset} out of range (holding {len})")]
    IndexOutOfRange { offset: usize, len: usize },
}

/// Failure modes of operations that span both containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Stack(#[from] StackError),

    /// Block swap attempted with fewer than `needed` pieces on either side.
    #[error("block swap needs {needed} pieces on each side (queue {queue_len}, stack {stack_len})")]
    InsufficientElements {
        needed: usize,
        queue_len: usize,
        stack_len: usize,
    },
}
