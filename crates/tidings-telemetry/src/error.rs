//! Telemetry error types.

use thiserror::Error;
use tidings_core::ContractError;

/// Errors that can occur while setting up logging.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A configuration value violated its contract.
    #[error("Configuration error: {0}")]
    Contract(#[from] ContractError),

    /// Initialization error.
    #[error("Initialization error: {0}")]
    InitError(String),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
