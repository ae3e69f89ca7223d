//! Key mapping from terminal events to stack commands.

use crate::types::StackCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One-line key legend for front-ends.
pub const KEY_HELP: &str =
    "1/space/enter play  2/c hold  3/r release  4/s swap  5/x exchange  6/u/ctrl-z undo  n restart  0/q quit";

/// Map keyboard input to stack commands.
pub fn handle_key_event(key: KeyEvent) -> Option<StackCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('z') | KeyCode::Char('Z') => Some(StackCommand::Undo),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char(' ') | KeyCode::Enter => Some(StackCommand::Play),
        KeyCode::Char('2') | KeyCode::Char('c') | KeyCode::Char('C') => Some(StackCommand::Hold),
        KeyCode::Char('3') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(StackCommand::Release)
        }
        KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => Some(StackCommand::Swap),
        KeyCode::Char('5') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(StackCommand::Exchange)
        }
        KeyCode::Char('6') | KeyCode::Char('u') | KeyCode::Char('U') => Some(StackCommand::Undo),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(StackCommand::Restart),
        _ => None,
    }
}

/// Check if key should quit the front-end.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
