//! Terminal view of the piece containers.
//!
//! [`StackView`] turns a snapshot into a styled [`Panel`] without any I/O, and
//! [`TerminalRenderer`] flushes that panel to the terminal through crossterm.

pub mod renderer;
pub mod stack_view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use renderer::{encode_panel_into, TerminalRenderer};
pub use stack_view::{
    describe_outcome, piece_color, Line, Panel, Rgb, Span, StackView, Status, TextStyle,
};
