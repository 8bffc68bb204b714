//! Transfer module - operations spanning the queue and the stack
//!
//! Stateless free functions over mutable borrows of both containers. Every
//! operation validates its preconditions up front and only then mutates, so
//! a failure leaves both containers exactly as they were.

use std::mem;

use crate::error::{QueueError, StackError, TransferError};
use crate::queue::PieceQueue;
use crate::stack::PieceStack;
use crate::types::Piece;

/// Move the front queue piece onto the top of the stack.
///
/// The stack is checked first: a full stack rejects the transfer before the
/// queue is even inspected, so the queue keeps its front piece. Returns the
/// moved piece.
pub fn reserve<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
) -> Result<Piece, TransferError> {
    if stack.is_full() {
        return Err(StackError::Full.into());
    }
    let piece = queue.dequeue()?;
    // The fullness check above guarantees a free slot; the piece cannot be
    // dropped between dequeue and push.
    stack.push(piece)?;
    Ok(piece)
}

/// Take the most recently reserved piece off the top of the stack.
///
/// This is the "use a reserved piece" operation of the driver; the queue is
/// not involved and not touched.
pub fn recall<const S: usize>(stack: &mut PieceStack<S>) -> Result<Piece, StackError> {
    stack.pop()
}

/// Exchange the queue front with the stack top in place.
///
/// Neither length changes; exactly two slots swap values. The queue is
/// validated first, so with both containers empty the reported error is
/// [`QueueError::Empty`]. Nothing moves on failure.
pub fn swap_top<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
) -> Result<(), TransferError> {
    if queue.is_empty() {
        return Err(QueueError::Empty.into());
    }
    if stack.is_empty() {
        return Err(StackError::Empty.into());
    }
    mem::swap(queue.slot_mut(0)?, stack.slot_mut(0)?);
    Ok(())
}

/// Exchange the front `n` queue pieces with the top `n` stack pieces.
///
/// Pairing is positional: queue offset `i` from the front swaps with stack
/// offset `i` from the top, so the old queue front becomes the new stack top
/// and vice versa. Both lengths are preserved. If either side holds fewer
/// than `n` pieces the whole exchange is rejected and zero slots change.
pub fn swap_block<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
    n: usize,
) -> Result<(), TransferError> {
    if queue.len() < n || stack.len() < n {
        return Err(TransferError::InsufficientElements {
            needed: n,
            queue_len: queue.len(),
            stack_len: stack.len(),
        });
    }
    for i in 0..n {
        mem::swap(queue.slot_mut(i)?, stack.slot_mut(i)?);
    }
    Ok(())
}
