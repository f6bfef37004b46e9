//! Event listener trait and closure adapter.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

/// Error returned by a listener callback.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by a listener callback.
pub type ListenerResult = Result<(), ListenerError>;

/// Trait for synchronous event listeners.
///
/// Listeners are registered as `Arc<dyn EventListener<C>>`. Membership is by
/// allocation identity: re-registering a clone of the same `Arc` is a no-op,
/// while two separately allocated listeners are always distinct.
pub trait EventListener<C>: Send + Sync {
    /// Called when an event this listener is registered on is raised.
    ///
    /// `sender` is whatever the raiser passed, typically the object owning
    /// the event; downcast it when the concrete type matters.
    ///
    /// Runs on the raising thread while the event's lock is held. Returning
    /// an error aborts the broadcast for the remaining listeners.
    ///
    /// # Errors
    ///
    /// Any error the listener chooses to report to the raiser.
    fn on_event(&self, sender: &dyn Any, context: &C) -> ListenerResult;

    /// Name used in log records and error reports.
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// A listener backed by a closure.
pub struct FnListener<C, F> {
    name: String,
    handler: F,
    _context: PhantomData<fn(&C)>,
}

impl<C, F> FnListener<C, F>
where
    F: Fn(&dyn Any, &C) -> ListenerResult + Send + Sync,
{
    /// Create a new closure listener.
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
            _context: PhantomData,
        }
    }
}

impl<C, F> EventListener<C> for FnListener<C, F>
where
    F: Fn(&dyn Any, &C) -> ListenerResult + Send + Sync,
{
    fn on_event(&self, sender: &dyn Any, context: &C) -> ListenerResult {
        (self.handler)(sender, context)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<C, F> fmt::Debug for FnListener<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
