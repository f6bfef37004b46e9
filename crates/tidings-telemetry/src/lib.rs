//! Tidings Telemetry - Logging setup for applications using Tidings.
//!
//! The library crates only emit `tracing` records; this crate installs a
//! subscriber that renders them.
//!
//! This crate provides:
//! - A serializable `LogConfig` with builder methods
//! - Pretty, compact and JSON output to stdout, stderr or daily log files
//!
//! # Example
//!
//! ```rust,no_run
//! use tidings_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), tidings_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("tidings_events=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("Logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, LogTarget, setup_default_logging, setup_logging};
