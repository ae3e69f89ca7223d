//! Error types for controller operations and configuration.

use thiserror::Error;

/// Expected, recoverable refusals of a controller operation.
///
/// Every variant is detected before any container is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("reserve is full")]
    ReserveFull,
    #[error("reserve is empty")]
    ReserveEmpty,
    #[error("nothing to undo")]
    UndoEmpty,
}

impl StackError {
    /// Stable snake_case code, used by the JSON session.
    pub fn code(&self) -> &'static str {
        match self {
            StackError::ReserveFull => "reserve_full",
            StackError::ReserveEmpty => "reserve_empty",
            StackError::UndoEmpty => "undo_empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be between 1 and {max}, got {value}")]
    CapacityOutOfRange {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error("reserve_capacity ({reserve}) must not exceed queue_capacity ({queue})")]
    ReserveExceedsQueue { reserve: usize, queue: usize },
}
