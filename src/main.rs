//! Terminal driver (default binary).
//!
//! Shows the next queue and the reserve stack and applies one session command
//! per keypress. Input and screen handling go through crossterm; the display
//! is a plain full redraw per command.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_stack::core::{CommandOutcome, GameSession};
use tetris_stack::input::{handle_key_event, should_quit};
use tetris_stack::term::{Screen, SessionView};

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut session = GameSession::new(startup_seed());
    let view = SessionView::new();

    let mut frame = String::new();
    let mut last_outcome: Option<CommandOutcome> = None;

    loop {
        view.render_into(&session, last_outcome.as_ref(), &mut frame);
        screen.draw(&frame)?;

        // The display only changes on input, so block until a key arrives.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(command) = handle_key_event(key) {
                last_outcome = Some(session.apply(command));
            }
        }
    }
}

/// First CLI argument as a seed, otherwise the clock.
///
/// Passing a seed replays a session exactly; without one each run draws a
/// fresh sequence.
fn startup_seed() -> u32 {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed)
}

fn clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as u32,
        Err(_) => 1,
    }
}
