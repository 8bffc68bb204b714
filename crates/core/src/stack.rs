//! Stack module - bounded LIFO of reserved pieces
//!
//! Backed by an [`ArrayVec`] so the storage is inline and the capacity is a
//! compile-time constant. The top of the stack is the most recently pushed
//! piece; display and peeks run top to base.

use arrayvec::ArrayVec;

use crate::error::StackError;
use crate::types::Piece;

/// Fixed-capacity stack of reserved pieces
///
/// `CAP` is the compile-time capacity. Offsets run top to base: offset 0 is
/// the piece a pop would return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceStack<const CAP: usize> {
    slots: ArrayVec<Piece, CAP>,
}

impl<const CAP: usize> PieceStack<CAP> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Number of pieces currently reserved
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Maximum number of pieces the stack can hold
    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Push a piece onto the top
    ///
    /// Fails with [`StackError::Full`] when every slot is occupied; the stack
    /// is untouched in that case.
    pub fn push(&mut self, piece: Piece) -> Result<(), StackError> {
        self.slots.try_push(piece).map_err(|_| StackError::Full)
    }

    /// Remove and return the top piece
    ///
    /// Fails with [`StackError::Empty`] when nothing is reserved.
    pub fn pop(&mut self) -> Result<Piece, StackError> {
        self.slots.pop().ok_or(StackError::Empty)
    }

    /// Read the top piece without removing it
    pub fn peek_top(&self) -> Result<Piece, StackError> {
        self.slots.last().copied().ok_or(StackError::Empty)
    }

    /// Read the piece at `offset` below the top (0 = top)
    pub fn peek_at(&self, offset: usize) -> Result<Piece, StackError> {
        let len = self.slots.len();
        if offset >= len {
            return Err(StackError::IndexOutOfRange { offset, len });
        }
        Ok(self.slots[len - 1 - offset])
    }

    /// Mutable slot access for in-place swaps, top-relative
    pub(crate) fn slot_mut(&mut self, offset: usize) -> Result<&mut Piece, StackError> {
        let len = self.slots.len();
        if offset >= len {
            return Err(StackError::IndexOutOfRange { offset, len });
        }
        Ok(&mut self.slots[len - 1 - offset])
    }

    /// Iterate the reserved pieces top to base
    pub fn iter_top_down(&self) -> impl Iterator<Item = Piece> + '_ {
        self.slots.iter().rev().copied()
    }
}

impl<const CAP: usize> Default for PieceStack<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
