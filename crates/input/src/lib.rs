//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::StackCommand`]. The key map
//! follows the numbered menu of the classic console version (1 = play, 2 = hold,
//! ...) with letter aliases.

pub mod map;

pub use tetris_stack_types as types;

pub use map::{handle_key_event, should_quit, KEY_HELP};
