//! Test fixtures for common values.

use std::any::Any;
use std::sync::Arc;

use tidings_events::EventListener;

/// A sender value tests can pass to `raise` and recognise afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSender(pub String);

/// Create the default test sender.
#[must_use]
pub fn test_sender() -> TestSender {
    TestSender("test-sender".to_string())
}

/// Create a test sender with a specific name.
#[must_use]
pub fn test_sender_named(name: impl Into<String>) -> TestSender {
    TestSender(name.into())
}

/// Create a fresh authorization key.
///
/// Every call allocates a new key, so two keys with the same value are still
/// different keys for identity-checked events.
#[must_use]
pub fn test_key(value: impl Into<String>) -> Arc<String> {
    Arc::new(value.into())
}

/// Describe a sender for assertions.
///
/// Recognises [`TestSender`], `&str` and `String`; anything else is
/// reported as `<opaque>`.
#[must_use]
pub fn describe_sender(sender: &dyn Any) -> String {
    if let Some(TestSender(name)) = sender.downcast_ref::<TestSender>() {
        name.clone()
    } else if let Some(s) = sender.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = sender.downcast_ref::<String>() {
        s.clone()
    } else {
        "<opaque>".to_string()
    }
}

/// Clone a concrete listener handle into the shape events accept.
#[must_use]
pub fn as_listener<C, L>(listener: &Arc<L>) -> Arc<dyn EventListener<C>>
where
    L: EventListener<C> + 'static,
{
    Arc::clone(listener) as Arc<dyn EventListener<C>>
}
