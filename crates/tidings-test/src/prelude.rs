//! Prelude module - commonly used types for convenient import.
//!
//! Use `use tidings_test::prelude::*;` to import all essential types.

// Re-export all public items from the crate root
pub use crate::fixtures::*;
pub use crate::harness::*;
pub use crate::mocks::*;
