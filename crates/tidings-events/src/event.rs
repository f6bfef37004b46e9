//! The registration surface shared by every event kind.

use std::sync::Arc;
use tidings_core::contract;

use crate::error::EventResult;
use crate::listener::EventListener;
use crate::notifier::Notifier;

/// An event listeners can subscribe to.
///
/// Raising is deliberately not part of this trait: each event kind defines
/// its own `raise` with whatever authorization it requires, so handing out
/// `&dyn Event<C>` lets callers subscribe without being able to raise.
pub trait Event<C> {
    /// The notifier holding this event's listeners.
    #[doc(hidden)]
    fn notifier(&self) -> &Notifier<C>;

    /// Register a listener to be called whenever the event is raised.
    ///
    /// Registering the same listener twice has no further effect.
    fn add_listener(&self, listener: Arc<dyn EventListener<C>>) {
        self.notifier().add_listener(listener);
    }

    /// Register a listener that may be absent.
    ///
    /// # Errors
    ///
    /// Returns a null-argument contract error if `listener` is `None`; the
    /// listener set is left untouched.
    fn try_add_listener(&self, listener: Option<Arc<dyn EventListener<C>>>) -> EventResult<()> {
        let listener = contract::non_null_named(listener, "listener")?;
        self.add_listener(listener);
        Ok(())
    }

    /// Unregister a listener.
    ///
    /// Returns `true` if the listener was registered and has been removed.
    fn remove_listener(&self, listener: &Arc<dyn EventListener<C>>) -> bool {
        self.notifier().remove_listener(listener)
    }

    /// Unregister a listener that may be absent.
    ///
    /// An absent listener is never registered, so `None` returns `false`
    /// without touching the listener set.
    fn try_remove_listener(&self, listener: Option<&Arc<dyn EventListener<C>>>) -> bool {
        listener.is_some_and(|listener| self.remove_listener(listener))
    }

    /// Check if any listener is registered.
    fn has_listeners(&self) -> bool {
        self.notifier().has_listeners()
    }
}
