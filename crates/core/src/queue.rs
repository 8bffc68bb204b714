//! Queue module - circular FIFO of upcoming pieces
//!
//! Fixed capacity, backed by an inline slot array. A front index and a length
//! counter track the occupied region; the front wraps modulo the capacity so
//! dequeue is O(1) with no shifting and no allocation.

use crate::error::QueueError;
use crate::types::Piece;

/// Fixed-capacity circular queue of upcoming pieces
///
/// `CAP` is the compile-time capacity. Logical offsets run front to back:
/// offset 0 is the next piece to play, offset `len - 1` the most recently
/// enqueued one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue<const CAP: usize> {
    slots: [Option<Piece>; CAP],
    front: usize,
    len: usize,
}

impl<const CAP: usize> PieceQueue<CAP> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; CAP],
            front: 0,
            len: 0,
        }
    }

    /// Physical slot index of the logical `offset` (0 = front)
    #[inline(always)]
    fn index(&self, offset: usize) -> usize {
        (self.front + offset) % CAP
    }

    /// Number of pieces currently queued
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of pieces the queue can hold
    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAP
    }

    /// Append a piece at the back
    ///
    /// Fails with [`QueueError::Full`] when every slot is occupied; the queue
    /// is untouched in that case.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }
        let back = self.index(self.len);
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece
    ///
    /// Fails with [`QueueError::Empty`] when nothing is queued.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        // Occupied slots are always Some; take() clears the slot on the way out.
        let piece = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = self.index(1);
        self.len -= 1;
        Ok(piece)
    }

    /// Read the front piece without removing it
    pub fn peek_front(&self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        self.slots[self.front].ok_or(QueueError::Empty)
    }

    /// Read the piece at logical `offset` from the front (0 = front)
    pub fn peek_at(&self, offset: usize) -> Result<Piece, QueueError> {
        if offset >= self.len {
            return Err(QueueError::IndexOutOfRange {
                offset,
                len: self.len,
            });
        }
        self.slots[self.index(offset)].ok_or(QueueError::Empty)
    }

    /// Mutable slot access for in-place swaps, front-relative
    pub(crate) fn slot_mut(&mut self, offset: usize) -> Result<&mut Piece, QueueError> {
        if offset >= self.len {
            return Err(QueueError::IndexOutOfRange {
                offset,
                len: self.len,
            });
        }
        let idx = self.index(offset);
        self.slots[idx].as_mut().ok_or(QueueError::Empty)
    }

    /// Iterate the queued pieces front to back
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.index(offset)])
    }
}

impl<const CAP: usize> Default for PieceQueue<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::T, id)
    }

    #[test]
    fn new_queue_is_empty() {
        let queue: PieceQueue<5> = PieceQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 5);
    }

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let mut queue: PieceQueue<5> = PieceQueue::new();
        for id in 0..3 {
            queue.enqueue(piece(id)).unwrap();
        }

        assert_eq!(queue.dequeue().unwrap().id, 0);
        assert_eq!(queue.dequeue().unwrap().id, 1);
        assert_eq!(queue.dequeue().unwrap().id, 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn enqueue_on_full_fails_without_mutation() {
        let mut queue: PieceQueue<3> = PieceQueue::new();
        for id in 0..3 {
            queue.enqueue(piece(id)).unwrap();
        }
        assert!(queue.is_full());

        let before: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(queue.enqueue(piece(99)), Err(QueueError::Full));
        let after: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn dequeue_on_empty_fails() {
        let mut queue: PieceQueue<3> = PieceQueue::new();
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
        assert_eq!(queue.peek_front(), Err(QueueError::Empty));
    }

    #[test]
    fn front_wraps_around_the_slot_array() {
        let mut queue: PieceQueue<3> = PieceQueue::new();

        // Fill, drain partially, refill: the back passes the physical end.
        queue.enqueue(piece(0)).unwrap();
        queue.enqueue(piece(1)).unwrap();
        queue.enqueue(piece(2)).unwrap();
        assert_eq!(queue.dequeue().unwrap().id, 0);
        assert_eq!(queue.dequeue().unwrap().id, 1);
        queue.enqueue(piece(3)).unwrap();
        queue.enqueue(piece(4)).unwrap();

        assert!(queue.is_full());
        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn peek_at_is_front_relative_across_wrap() {
        let mut queue: PieceQueue<3> = PieceQueue::new();
        queue.enqueue(piece(0)).unwrap();
        queue.enqueue(piece(1)).unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(piece(2)).unwrap();
        queue.enqueue(piece(3)).unwrap();

        assert_eq!(queue.peek_at(0).unwrap().id, 1);
        assert_eq!(queue.peek_at(1).unwrap().id, 2);
        assert_eq!(queue.peek_at(2).unwrap().id, 3);
        assert_eq!(
            queue.peek_at(3),
            Err(QueueError::IndexOutOfRange { offset: 3, len: 3 })
        );
    }

    #[test]
    fn peek_does_not_consume() {
        let mut queue: PieceQueue<5> = PieceQueue::new();
        queue.enqueue(piece(7)).unwrap();

        assert_eq!(queue.peek_front().unwrap().id, 7);
        assert_eq!(queue.peek_front().unwrap().id, 7);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn repeated_cycling_preserves_order() {
        let mut queue: PieceQueue<5> = PieceQueue::new();
        let mut next = 0;
        for id in 0..5 {
            queue.enqueue(piece(id)).unwrap();
        }

        // Many full rotations of the ring.
        for id in 5..105 {
            assert_eq!(queue.dequeue().unwrap().id, next);
            next += 1;
            queue.enqueue(piece(id)).unwrap();
        }
        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![100, 101, 102, 103, 104]);
    }
}
