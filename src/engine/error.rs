//! Timer engine error types.

use thiserror::Error;

use crate::types::ConfigField;

/// Errors returned by the timer engine.
///
/// Ticking, starting and resetting never fail; only configuration changes do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The request is not allowed in the engine's current state.
    #[error("{0}")]
    InvalidState(String),

    /// A setting value was rejected; the previous value is kept.
    #[error("invalid value '{input}' for {field}: expected a whole number of 0 or more")]
    Validation {
        /// Field the value was meant for
        field: ConfigField,
        /// The rejected input
        input: String,
    },
}

impl TimerError {
    /// Creates the error for a configuration change attempted mid-run.
    pub fn running(field: ConfigField) -> Self {
        Self::InvalidState(format!(
            "cannot change {} while the timer is running",
            field
        ))
    }

    /// Returns true if the request was rejected because of the engine state.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Returns true if the input value was rejected.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
