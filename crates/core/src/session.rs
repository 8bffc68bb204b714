//! Session module - driver-level bookkeeping around the two containers
//!
//! [`GameSession`] owns the next queue, the reserve stack, the generator and
//! the id counter, and applies the replenishment policy: whenever a command
//! removes pieces from the queue, freshly generated pieces top it back up to
//! capacity. The containers themselves never generate pieces.
//!
//! Nothing in this module performs I/O; outcomes are returned as values for
//! a front end to render.

use crate::error::{QueueError, StackError, TransferError};
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::stack::PieceStack;
use crate::transfer;
use crate::types::{Command, Piece, NEXT_QUEUE_CAPACITY, RESERVE_CAPACITY, SWAP_BLOCK_LEN};

/// The next queue at its reference capacity
pub type NextQueue = PieceQueue<NEXT_QUEUE_CAPACITY>;

/// The reserve stack at its reference capacity
pub type ReserveStack = PieceStack<RESERVE_CAPACITY>;

/// Complete session state
///
/// Single-threaded by design: one session, mutated in place by one caller.
#[derive(Debug, Clone)]
pub struct GameSession {
    queue: NextQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
    /// Next id to hand out. Monotonic; ids are never reused.
    next_id: u32,
}

/// What a command did, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A piece changed hands: played, reserved or recalled.
    Moved { command: Command, piece: Piece },
    /// A swap completed; both containers kept their lengths.
    Swapped { command: Command },
    /// The command failed; both containers are unchanged.
    Rejected {
        command: Command,
        error: TransferError,
    },
}

impl GameSession {
    /// Start a session: empty stack, queue pre-filled to capacity.
    pub fn new(seed: u32) -> Self {
        let mut session = Self {
            queue: NextQueue::new(),
            stack: ReserveStack::new(),
            generator: PieceGenerator::new(seed),
            next_id: 0,
        };
        session.replenish();
        session
    }

    /// Top the queue up to capacity from the generator.
    ///
    /// One piece per freed slot, ids strictly increasing.
    fn replenish(&mut self) {
        while !self.queue.is_full() {
            let piece = self.generator.generate(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            // The loop condition just saw a free slot.
            let _ = self.queue.enqueue(piece);
        }
    }

    /// Play the front piece, then refill the queue.
    pub fn play(&mut self) -> Result<Piece, QueueError> {
        let piece = self.queue.dequeue()?;
        self.replenish();
        Ok(piece)
    }

    /// Move the front piece to the reserve stack, then refill the queue.
    ///
    /// A full stack rejects the move before the queue is touched, so no
    /// replenishment happens on failure.
    pub fn reserve(&mut self) -> Result<Piece, TransferError> {
        let piece = transfer::reserve(&mut self.queue, &mut self.stack)?;
        self.replenish();
        Ok(piece)
    }

    /// Use the most recently reserved piece.
    ///
    /// The queue is not involved, so nothing is generated.
    pub fn recall(&mut self) -> Result<Piece, StackError> {
        transfer::recall(&mut self.stack)
    }

    /// Exchange the queue front with the stack top in place.
    pub fn swap_top(&mut self) -> Result<(), TransferError> {
        transfer::swap_top(&mut self.queue, &mut self.stack)
    }

    /// Exchange the front [`SWAP_BLOCK_LEN`] queue pieces with as many stack pieces.
    pub fn swap_block(&mut self) -> Result<(), TransferError> {
        transfer::swap_block(&mut self.queue, &mut self.stack, SWAP_BLOCK_LEN)
    }

    /// Apply a driver command and fold the result into a display outcome.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let result = match command {
            Command::Play => self.play().map(Some).map_err(TransferError::from),
            Command::Reserve => self.reserve().map(Some),
            Command::Recall => self.recall().map(Some).map_err(TransferError::from),
            Command::SwapTop => self.swap_top().map(|()| None),
            Command::SwapBlock => self.swap_block().map(|()| None),
        };
        match result {
            Ok(Some(piece)) => CommandOutcome::Moved { command, piece },
            Ok(None) => CommandOutcome::Swapped { command },
            Err(error) => CommandOutcome::Rejected { command, error },
        }
    }

    /// The next queue, front to back.
    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    /// The reserve stack, top first.
    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// How many pieces the generator has issued so far.
    pub fn pieces_issued(&self) -> u32 {
        self.next_id
    }

    /// Seed the session was started with (for replays).
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
