//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, making them usable
//! in any context (core containers, terminal view, JSON session).
//!
//! # Default Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_QUEUE_CAPACITY` | 5 | Lookahead queue length (always full) |
//! | `DEFAULT_RESERVE_CAPACITY` | 3 | Reserve stack slots |
//! | `DEFAULT_UNDO_CAPACITY` | 5 | Undo history entries before eviction |
//! | `MAX_CAPACITY` | 16 | Upper bound for any configured capacity |
//!
//! # Piece Ids
//!
//! Every generated piece gets an id from a counter starting at [`FIRST_PIECE_ID`].
//! Ids are never reused, so a piece's id is its identity.
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, StackCommand, FIRST_PIECE_ID};
//!
//! let piece = Piece::new(PieceKind::T, FIRST_PIECE_ID);
//! assert_eq!(piece.to_string(), "[T 1001]");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("l"), Some(PieceKind::L));
//! assert_eq!(StackCommand::from_str("Undo"), Some(StackCommand::Undo));
//! ```

use std::fmt;

/// Lookahead queue length used when nothing else is configured.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// Reserve stack slots used when nothing else is configured.
pub const DEFAULT_RESERVE_CAPACITY: usize = 3;

/// Undo history entries kept before the oldest one is evicted.
pub const DEFAULT_UNDO_CAPACITY: usize = 5;

/// Hard upper bound for every container capacity.
///
/// Containers use inline storage of this size so the hot paths never allocate.
pub const MAX_CAPACITY: usize = 16;

/// Id assigned to the first generated piece.
pub const FIRST_PIECE_ID: u32 = 1001;

/// The seven piece kinds
///
/// The kind is a display tag only; no behavior depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in the order random selection indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Uppercase display symbol
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::J.as_char(), 'J');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// A single piece token.
///
/// Pieces are plain values: moving one between containers copies it out of
/// the source slot, and the source stops tracking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Commands accepted by the controller
///
/// These commands are used by both the terminal front-end and the JSON session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackCommand {
    /// Play the front piece of the queue
    Play,
    /// Move the front piece into the reserve
    Hold,
    /// Take the top piece out of the reserve
    Release,
    /// Exchange queue front and reserve top
    Swap,
    /// Put the last played piece back at the queue front
    Undo,
    /// Exchange the reserve with the front of the queue
    Exchange,
    /// Refill the queue and clear reserve and history
    Restart,
}

impl StackCommand {
    pub const ALL: [StackCommand; 7] = [
        StackCommand::Play,
        StackCommand::Hold,
        StackCommand::Release,
        StackCommand::Swap,
        StackCommand::Undo,
        StackCommand::Exchange,
        StackCommand::Restart,
    ];

    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::StackCommand;
    ///
    /// assert_eq!(StackCommand::from_str("play"), Some(StackCommand::Play));
    /// assert_eq!(StackCommand::from_str("EXCHANGE"), Some(StackCommand::Exchange));
    /// assert_eq!(StackCommand::from_str("rotate"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(StackCommand::Play),
            "hold" => Some(StackCommand::Hold),
            "release" => Some(StackCommand::Release),
            "swap" => Some(StackCommand::Swap),
            "undo" => Some(StackCommand::Undo),
            "exchange" => Some(StackCommand::Exchange),
            "restart" => Some(StackCommand::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StackCommand::Play => "play",
            StackCommand::Hold => "hold",
            StackCommand::Release => "release",
            StackCommand::Swap => "swap",
            StackCommand::Undo => "undo",
            StackCommand::Exchange => "exchange",
            StackCommand::Restart => "restart",
        }
    }
}
