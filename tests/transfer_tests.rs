//! Transfer tests - all-or-nothing moves between queue and stack

use tetris_stack::core::{
    transfer, NextQueue, QueueError, ReserveStack, StackError, TransferError,
};
use tetris_stack::types::{Piece, PieceKind};

fn piece(kind: PieceKind, id: u32) -> Piece {
    Piece::new(kind, id)
}

/// Queue [front 0, 1, 2, 3, 4], stack [top 10, 11, 12].
fn full_setup() -> (NextQueue, ReserveStack) {
    let mut queue = NextQueue::new();
    for id in 0..5 {
        queue.enqueue(piece(PieceKind::I, id)).unwrap();
    }
    let mut stack = ReserveStack::new();
    for id in [12, 11, 10] {
        stack.push(piece(PieceKind::O, id)).unwrap();
    }
    (queue, stack)
}

fn queue_ids(queue: &NextQueue) -> Vec<u32> {
    queue.iter().map(|p| p.id).collect()
}

fn stack_ids(stack: &ReserveStack) -> Vec<u32> {
    stack.iter_top_down().map(|p| p.id).collect()
}

#[test]
fn test_reserve_then_recall_round_trip() {
    let mut queue = NextQueue::new();
    queue.enqueue(piece(PieceKind::T, 0)).unwrap();
    queue.enqueue(piece(PieceKind::L, 1)).unwrap();
    let mut stack = ReserveStack::new();

    let moved = transfer::reserve(&mut queue, &mut stack).unwrap();
    assert_eq!(moved.id, 0);
    assert_eq!(queue.peek_front().unwrap().id, 1);

    let back = transfer::recall(&mut stack).unwrap();
    assert_eq!(back, moved);
    assert!(stack.is_empty());
}

#[test]
fn test_reserve_into_full_stack_is_rejected_whole() {
    let (mut queue, mut stack) = full_setup();

    let err = transfer::reserve(&mut queue, &mut stack);
    assert_eq!(err, Err(TransferError::Stack(StackError::Full)));

    // Neither side moved: the queue still has its front, the stack its top.
    assert_eq!(queue_ids(&queue), vec![0, 1, 2, 3, 4]);
    assert_eq!(stack_ids(&stack), vec![10, 11, 12]);
}

#[test]
fn test_swap_top_exchanges_front_and_top_only() {
    let (mut queue, mut stack) = full_setup();

    transfer::swap_top(&mut queue, &mut stack).unwrap();

    assert_eq!(queue_ids(&queue), vec![10, 1, 2, 3, 4]);
    assert_eq!(stack_ids(&stack), vec![0, 11, 12]);
}

#[test]
fn test_swap_top_preserves_kinds_with_values() {
    let mut queue = NextQueue::new();
    queue.enqueue(piece(PieceKind::T, 0)).unwrap();
    let mut stack = ReserveStack::new();
    stack.push(piece(PieceKind::L, 9)).unwrap();

    transfer::swap_top(&mut queue, &mut stack).unwrap();

    assert_eq!(queue.peek_front().unwrap(), piece(PieceKind::L, 9));
    assert_eq!(stack.peek_top().unwrap(), piece(PieceKind::T, 0));
}

#[test]
fn test_swap_top_needs_both_sides() {
    let mut queue = NextQueue::new();
    let mut stack = ReserveStack::new();

    // Both empty: the queue is validated first.
    assert_eq!(
        transfer::swap_top(&mut queue, &mut stack),
        Err(TransferError::Queue(QueueError::Empty))
    );

    queue.enqueue(piece(PieceKind::I, 0)).unwrap();
    assert_eq!(
        transfer::swap_top(&mut queue, &mut stack),
        Err(TransferError::Stack(StackError::Empty))
    );
    assert_eq!(queue.peek_front().unwrap().id, 0);
}

#[test]
fn test_swap_block_pairs_front_with_top() {
    let (mut queue, mut stack) = full_setup();

    transfer::swap_block(&mut queue, &mut stack, 3).unwrap();

    // Front pairs with top, second with second, third with third; the two
    // queue slots behind the block stay put.
    assert_eq!(queue_ids(&queue), vec![10, 11, 12, 3, 4]);
    assert_eq!(stack_ids(&stack), vec![0, 1, 2]);
}

#[test]
fn test_swap_block_short_stack_leaves_everything() {
    let mut queue = NextQueue::new();
    for id in 0..5 {
        queue.enqueue(piece(PieceKind::T, id)).unwrap();
    }
    let mut stack = ReserveStack::new();
    stack.push(piece(PieceKind::O, 10)).unwrap();
    stack.push(piece(PieceKind::O, 11)).unwrap();

    let err = transfer::swap_block(&mut queue, &mut stack, 3);
    assert_eq!(
        err,
        Err(TransferError::InsufficientElements {
            needed: 3,
            queue_len: 5,
            stack_len: 2,
        })
    );
    assert_eq!(queue_ids(&queue), vec![0, 1, 2, 3, 4]);
    assert_eq!(stack_ids(&stack), vec![11, 10]);
}

#[test]
fn test_swap_block_short_queue_leaves_everything() {
    let mut queue = NextQueue::new();
    queue.enqueue(piece(PieceKind::L, 0)).unwrap();
    let mut stack = ReserveStack::new();
    for id in [12, 11, 10] {
        stack.push(piece(PieceKind::I, id)).unwrap();
    }

    let err = transfer::swap_block(&mut queue, &mut stack, 3);
    assert_eq!(
        err,
        Err(TransferError::InsufficientElements {
            needed: 3,
            queue_len: 1,
            stack_len: 3,
        })
    );
    assert_eq!(queue_ids(&queue), vec![0]);
    assert_eq!(stack_ids(&stack), vec![10, 11, 12]);
}

#[test]
fn test_double_swap_block_restores_the_start() {
    let (mut queue, mut stack) = full_setup();
    let queue_before = queue.clone();
    let stack_before = stack.clone();

    transfer::swap_block(&mut queue, &mut stack, 3).unwrap();
    transfer::swap_block(&mut queue, &mut stack, 3).unwrap();

    assert_eq!(queue, queue_before);
    assert_eq!(stack, stack_before);
}
