//! Prelude module - commonly used types for convenient import.
//!
//! Use `use tidings_core::prelude::*;` to import all essential types.

// Errors
pub use crate::{ContractError, ContractResult};

// Contract checks
pub use crate::contract::{non_null, non_null_named, non_nulls, require, require_that};
