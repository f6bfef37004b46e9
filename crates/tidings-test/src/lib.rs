//! Tidings Test - Shared test utilities for the Tidings crates.
//!
//! This crate provides mock listeners and fixtures that can be used from
//! integration tests and downstream crates as a dev-dependency.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tidings-test.workspace = true
//! ```
//!
//! Then use in your tests:
//!
//! ```rust,ignore
//! use tidings_events::{Event, PublicEvent};
//! use tidings_test::{RecordingListener, as_listener, test_sender};
//!
//! #[test]
//! fn test_broadcast() {
//!     let event = PublicEvent::new();
//!     let recorder = RecordingListener::new("recorder");
//!     event.add_listener(as_listener(&recorder));
//!
//!     event.raise(&test_sender(), &5).unwrap();
//!     assert_eq!(recorder.contexts(), vec![5]);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;
