//! Tidings Core - Foundation types shared by the Tidings crates.
//!
//! This crate provides:
//! - The `ContractError` taxonomy for rejected arguments
//! - Argument contract checks (`non_null`, `require`, ...) usable inline
//!
//! # Example
//!
//! ```rust
//! use tidings_core::contract;
//!
//! # fn main() -> Result<(), tidings_core::ContractError> {
//! let port = contract::non_null_named(Some(8080_u16), "port")?;
//! contract::require_that(port > 1024, "port must be unprivileged")?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod contract;
pub mod error;

pub use error::{ContractError, ContractResult};
