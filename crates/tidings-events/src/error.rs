//! Event error types.

use thiserror::Error;
use tidings_core::ContractError;

use crate::listener::ListenerError;

/// Errors that can occur when registering listeners or raising events.
#[derive(Debug, Error)]
pub enum EventError {
    /// An argument contract was violated.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// The key presented to a privileged event was rejected.
    #[error("invalid key: {key}")]
    Unauthorized {
        /// Debug rendering of the rejected key.
        key: String,
    },

    /// A listener failed, aborting the rest of the broadcast.
    #[error("listener '{listener}' failed: {source}")]
    Listener {
        /// Name of the failing listener.
        listener: String,
        /// The error the listener returned.
        #[source]
        source: ListenerError,
    },
}

impl EventError {
    /// Check if this error is an authorization failure.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Result type for event operations.
pub type EventResult<T> = Result<T, EventError>;
