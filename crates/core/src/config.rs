//! Container capacities.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_QUEUE_CAPACITY, DEFAULT_RESERVE_CAPACITY, DEFAULT_UNDO_CAPACITY, MAX_CAPACITY,
};

/// Capacities for the three containers owned by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    pub queue_capacity: usize,
    pub reserve_capacity: usize,
    pub undo_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            reserve_capacity: DEFAULT_RESERVE_CAPACITY,
            undo_capacity: DEFAULT_UNDO_CAPACITY,
        }
    }
}

impl StackConfig {
    pub fn new(queue_capacity: usize, reserve_capacity: usize, undo_capacity: usize) -> Self {
        Self {
            queue_capacity,
            reserve_capacity,
            undo_capacity,
        }
    }

    /// Create from environment variables.
    ///
    /// Reads `TETRIS_STACK_QUEUE_CAPACITY`, `TETRIS_STACK_RESERVE_CAPACITY` and
    /// `TETRIS_STACK_UNDO_CAPACITY`. Missing or unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StackConfig::from_env`] with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            queue_capacity: read("TETRIS_STACK_QUEUE_CAPACITY", defaults.queue_capacity),
            reserve_capacity: read("TETRIS_STACK_RESERVE_CAPACITY", defaults.reserve_capacity),
            undo_capacity: read("TETRIS_STACK_UNDO_CAPACITY", defaults.undo_capacity),
        }
    }

    /// Check every capacity is within `1..=MAX_CAPACITY` and the reserve is no
    /// larger than the queue.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("queue_capacity", self.queue_capacity),
            ("reserve_capacity", self.reserve_capacity),
            ("undo_capacity", self.undo_capacity),
        ] {
            if value == 0 || value > MAX_CAPACITY {
                return Err(ConfigError::CapacityOutOfRange {
                    name,
                    value,
                    max: MAX_CAPACITY,
                });
            }
        }
        if self.reserve_capacity > self.queue_capacity {
            return Err(ConfigError::ReserveExceedsQueue {
                reserve: self.reserve_capacity,
                queue: self.queue_capacity,
            });
        }
        Ok(())
    }
}
