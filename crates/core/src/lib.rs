//! Core stack logic - pure, deterministic, and testable
//!
//! This crate contains the three bounded containers of the "next pieces"
//! pipeline and the controller that moves pieces between them. It has **no
//! dependencies** on terminal, JSON, or any other I/O, making it:
//!
//! - **Deterministic**: Same seed (or script) produces identical piece sequences
//! - **Testable**: Every operation is a closed-form state transition
//! - **Fast**: Inline storage, no heap allocation on the operation paths
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG and scripted kind sources
//! - [`factory`]: piece generation with sequential ids starting at 1001
//! - [`queue`]: always-full circular lookahead queue
//! - [`reserve`]: bounded LIFO of held pieces
//! - [`history`]: bounded undo history with oldest-entry eviction
//! - [`controller`]: play, hold, release, swap, undo, exchange, restart
//! - [`snapshot`]: read-only copy of all containers for presentation
//! - [`config`]: container capacities (defaults, environment, validation)
//! - [`error`]: typed refusals and configuration errors
//!
//! # Rules
//!
//! - The queue always holds exactly `queue_capacity` pieces between operations.
//! - The reserve refuses pushes when full and yields nothing when empty.
//! - The undo history never refuses a push; a full history drops its oldest entry.
//! - Only `play` is undoable. Undo puts the played piece back at the queue
//!   front and discards the piece generated to backfill it.
//! - Released pieces leave the system: they are not put back into the queue.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{GameController, StackConfig, StackError};
//!
//! let mut game = GameController::new(StackConfig::default(), 12345).unwrap();
//!
//! let first = game.queue().peek_front();
//! let played = game.play();
//! assert_eq!(played.played, first);
//!
//! let undone = game.undo().unwrap();
//! assert_eq!(undone.restored, first);
//! assert_eq!(game.undo(), Err(StackError::UndoEmpty));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod factory;
pub mod history;
pub mod outcome;
pub mod queue;
pub mod reserve;
pub mod rng;
pub mod snapshot;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use config::StackConfig;
pub use controller::GameController;
pub use error::{ConfigError, StackError};
pub use factory::PieceFactory;
pub use history::UndoHistory;
pub use outcome::{
    CapacityMismatch, ExchangeResult, HoldResult, Outcome, PlayResult, ReleaseResult,
    RestartResult, SwapResult, UndoResult,
};
pub use queue::PieceQueue;
pub use reserve::ReserveStack;
pub use rng::{KindSource, ScriptedKinds, SimpleRng};
pub use snapshot::StackSnapshot;
