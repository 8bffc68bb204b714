//! Key mapping from terminal events to session commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session commands.
///
/// The digits mirror the menu the driver prints: 1 plays, 2 reserves,
/// 3 recalls, 4 swaps front/top, 5 swaps a block of three.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('1') => Some(Command::Play),
        KeyCode::Char('2') => Some(Command::Reserve),
        KeyCode::Char('3') => Some(Command::Recall),
        KeyCode::Char('4') => Some(Command::SwapTop),
        KeyCode::Char('5') => Some(Command::SwapBlock),
        _ => None,
    }
}

/// Check if key should quit the driver.
///
/// `0` matches the menu's exit entry; `q`, Esc and Ctrl-C quit as usual.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('0') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
