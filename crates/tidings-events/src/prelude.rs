//! Prelude module - commonly used types for convenient import.
//!
//! Use `use tidings_events::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use std::any::Any;
//! use std::sync::Arc;
//! use tidings_events::prelude::*;
//!
//! # fn main() -> EventResult<()> {
//! let event: PublicEvent<u32> = PublicEvent::new();
//! event.add_listener(Arc::new(FnListener::new(
//!     "logger",
//!     |_sender: &dyn Any, ctx: &u32| {
//!         println!("value: {ctx}");
//!         Ok(())
//!     },
//! )));
//!
//! event.raise(&"example", &1)?;
//! # Ok(())
//! # }
//! ```

// Errors
pub use crate::{EventError, EventResult};

// Listeners
pub use crate::{EventListener, FnListener, ListenerError, ListenerResult};

// Events
pub use crate::{Event, Notifier, PrivilegedEvent, PrivilegedEventBuilder, PublicEvent};
