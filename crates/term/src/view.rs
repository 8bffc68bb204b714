//! SessionView: maps the session state into a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::core::{CommandOutcome, GameSession, PieceQueue, PieceStack};
use crate::types::Command;

/// Renders the whole session as a text frame, one frame per command.
///
/// The frame is plain lines; the screen layer decides how they reach the
/// terminal.
#[derive(Debug, Default)]
pub struct SessionView;

impl SessionView {
    pub fn new() -> Self {
        Self
    }

    /// Render the session into an existing string buffer.
    ///
    /// Callers can keep one buffer and pass it in every frame.
    pub fn render_into(
        &self,
        session: &GameSession,
        status: Option<&CommandOutcome>,
        out: &mut String,
    ) {
        out.clear();
        let _ = writeln!(out, "piece stacks  (seed {})", session.seed());
        let _ = writeln!(out);
        let _ = writeln!(out, "next (front to back):");
        let _ = writeln!(out, "  {}", queue_line(session.queue()));
        let _ = writeln!(out, "reserve (top to base):");
        let _ = writeln!(out, "  {}", stack_line(session.stack()));
        let _ = writeln!(out);
        let _ = writeln!(out, "pieces issued: {}", session.pieces_issued());
        let _ = writeln!(out);
        let _ = writeln!(out, "[1] play the front piece");
        let _ = writeln!(out, "[2] reserve the front piece");
        let _ = writeln!(out, "[3] recall the reserved top");
        let _ = writeln!(out, "[4] swap queue front and stack top");
        let _ = writeln!(out, "[5] swap the front three for the top three");
        let _ = writeln!(out, "[0] quit");
        if let Some(outcome) = status {
            let _ = writeln!(out);
            let _ = writeln!(out, "> {}", outcome_line(outcome));
        }
    }
}

/// One-line rendering of the queue, front to back.
pub fn queue_line<const CAP: usize>(queue: &PieceQueue<CAP>) -> String {
    if queue.is_empty() {
        return "(empty)".to_string();
    }
    let mut line = String::new();
    for piece in queue.iter() {
        if !line.is_empty() {
            line.push(' ');
        }
        let _ = write!(line, "{}", piece);
    }
    line
}

/// One-line rendering of the stack, top to base.
pub fn stack_line<const CAP: usize>(stack: &PieceStack<CAP>) -> String {
    if stack.is_empty() {
        return "(empty)".to_string();
    }
    let mut line = String::new();
    for piece in stack.iter_top_down() {
        if !line.is_empty() {
            line.push(' ');
        }
        let _ = write!(line, "{}", piece);
    }
    line
}

/// One-line status for the last command.
pub fn outcome_line(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Moved { command, piece } => {
            let verb = match command {
                Command::Play => "played",
                Command::Reserve => "reserved",
                Command::Recall => "recalled",
                // Swaps report through Swapped; these arms keep the match total.
                Command::SwapTop | Command::SwapBlock => "moved",
            };
            format!("{} {}", verb, piece)
        }
        CommandOutcome::Swapped { command } => format!("{} done", command.label()),
        CommandOutcome::Rejected { command, error } => {
            format!("{} rejected: {}", command.label(), error)
        }
    }
}
