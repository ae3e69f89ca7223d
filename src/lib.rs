//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof:
//! `tetris_stack::{core,adapter,term,input,types}`.

pub use tetris_stack_adapter as adapter;
pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;
