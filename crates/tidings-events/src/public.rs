//! An event anyone holding it may raise.

use std::any::Any;
use std::fmt;

use crate::error::EventResult;
use crate::event::Event;
use crate::notifier::Notifier;

/// An open event: no check is made when it is raised.
pub struct PublicEvent<C> {
    notifier: Notifier<C>,
}

impl<C> PublicEvent<C> {
    /// Create a new event with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notifier: Notifier::new(),
        }
    }

    /// Create a new event labelled `name` in log records.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            notifier: Notifier::named(name),
        }
    }

    /// Notify every registered listener with `(sender, context)`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Listener`](crate::EventError::Listener) if a
    /// listener fails; listeners not yet reached are skipped.
    pub fn raise(&self, sender: &dyn Any, context: &C) -> EventResult<()> {
        self.notifier.notify_all(sender, context)
    }

    /// Get the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.notifier.listener_count()
    }
}

impl<C> Event<C> for PublicEvent<C> {
    fn notifier(&self) -> &Notifier<C> {
        &self.notifier
    }
}

impl<C> Default for PublicEvent<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for PublicEvent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicEvent")
            .field("notifier", &self.notifier)
            .finish()
    }
}
