//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Container Capacities
//!
//! The reference sizing for the piece-management system:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NEXT_QUEUE_CAPACITY` | 5 | Look-ahead window of upcoming pieces |
//! | `RESERVE_CAPACITY` | 3 | Maximum pieces held in reserve |
//! | `SWAP_BLOCK_LEN` | 3 | Pieces exchanged by the block swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, NEXT_QUEUE_CAPACITY};
//!
//! // Create a piece value
//! let piece = Piece::new(PieceKind::T, 7);
//! assert_eq!(piece.kind, PieceKind::T);
//! assert_eq!(format!("{piece}"), "[T 7]");
//!
//! // Parse a kind from its display letter
//! assert_eq!(PieceKind::from_char('l'), Some(PieceKind::L));
//!
//! // Reference capacity
//! assert_eq!(NEXT_QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Capacity of the next-piece queue (5 upcoming pieces)
pub const NEXT_QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack (3 held-aside pieces)
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces exchanged by the block swap (front 3 of the queue
/// against the top 3 of the stack)
pub const SWAP_BLOCK_LEN: usize = 3;

/// The four tetromino piece kinds managed by the system
///
/// Each kind is displayed by its letter:
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in generator draw order
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Display letter for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::L.as_char(), 'L');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A tetromino token: a shape kind plus a unique id
///
/// Pieces are plain values - copied between containers, never shared.
/// The id is assigned once at generation time and is monotonically
/// increasing across the session; no two live pieces share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    /// Create a piece value
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    /// Formats as `[K id]`, the notation used throughout the display
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Commands the driver can apply to a session
///
/// Each command maps to one menu entry of the driver binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the piece at the front of the queue (queue is refilled after)
    Play,
    /// Move the front-of-queue piece onto the reserve stack
    Reserve,
    /// Use the most recently reserved piece (pop the stack)
    Recall,
    /// Exchange the queue front with the stack top in place
    SwapTop,
    /// Exchange the front 3 queue pieces with the top 3 stack pieces
    SwapBlock,
}

impl Command {
    /// Short label used by the driver menu and status line
    pub fn label(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::Recall => "recall",
            Command::SwapTop => "swap front/top",
            Command::SwapBlock => "swap three",
        }
    }
}
