//! Tidings Events - Synchronous event notifiers.
//!
//! This crate provides:
//! - The `EventListener` callback trait and a closure adapter
//! - A mutex-guarded listener set (`Notifier`) that broadcasts synchronously
//! - `PublicEvent`, which any holder may raise
//! - `PrivilegedEvent`, which only a caller presenting the right key may raise
//!
//! # Architecture
//!
//! Every event owns one `Notifier`. Registration, removal and broadcast all
//! take that notifier's lock, so a broadcast sees a consistent listener set
//! and independent events never contend with each other. Listeners run on
//! the raising thread, in no particular order, and the first listener error
//! aborts the broadcast.
//!
//! # Example
//!
//! ```rust
//! use std::any::Any;
//! use std::sync::Arc;
//! use tidings_events::{Event, EventListener, FnListener, PrivilegedEvent};
//!
//! # fn main() -> Result<(), tidings_events::EventError> {
//! let key = Arc::new(String::from("secret"));
//! let event: PrivilegedEvent<u32, String> = PrivilegedEvent::new(Arc::clone(&key));
//!
//! let listener: Arc<dyn EventListener<u32>> =
//!     Arc::new(FnListener::new("printer", |_sender: &dyn Any, value: &u32| {
//!         println!("got {value}");
//!         Ok(())
//!     }));
//! event.add_listener(listener);
//!
//! // Only the holder of the original key object may raise.
//! event.raise(&key, &"producer", &7)?;
//! assert!(event.raise(&String::from("secret"), &"producer", &8).is_err());
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

mod error;
mod event;
mod listener;
mod notifier;
mod privileged;
mod public;

pub use error::{EventError, EventResult};
pub use event::Event;
pub use listener::{EventListener, FnListener, ListenerError, ListenerResult};
pub use notifier::Notifier;
pub use privileged::{PrivilegedEvent, PrivilegedEventBuilder};
pub use public::PublicEvent;
