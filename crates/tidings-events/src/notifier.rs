//! Mutex-guarded listener set with synchronous broadcast.

use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use tracing::{debug, trace, warn};

use crate::error::{EventError, EventResult};
use crate::listener::EventListener;

const ANONYMOUS: &str = "anonymous";

/// Set entry comparing listeners by allocation address.
struct ListenerHandle<C>(Arc<dyn EventListener<C>>);

impl<C> ListenerHandle<C> {
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl<C> PartialEq for ListenerHandle<C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.addr(), other.addr())
    }
}

impl<C> Eq for ListenerHandle<C> {}

impl<C> Hash for ListenerHandle<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

/// The listener set shared by every event kind.
///
/// All operations take the same per-instance lock, including the broadcast,
/// which holds it while listeners run. A listener must therefore not call
/// back into the notifier that is invoking it. `Debug` formatting is the
/// exception: it only tries the lock and reports `<locked>` when it is held.
pub struct Notifier<C> {
    name: Option<String>,
    listeners: Mutex<HashSet<ListenerHandle<C>>>,
}

impl<C> Notifier<C> {
    /// Create an unnamed notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            listeners: Mutex::new(HashSet::new()),
        }
    }

    /// Create a notifier labelled `name` in log records.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// The label used in log records.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<ListenerHandle<C>>> {
        self.listeners.lock().unwrap_or_else(|poisoned| {
            warn!(event = %self.name(), "Listener set lock poisoned, recovering");
            self.listeners.clear_poison();
            PoisonError::into_inner(poisoned)
        })
    }

    /// Register a listener. Registering the same listener twice is a no-op.
    pub fn add_listener(&self, listener: Arc<dyn EventListener<C>>) {
        let listener_name = listener.name().to_string();
        let inserted = self.lock().insert(ListenerHandle(listener));

        if inserted {
            debug!(event = %self.name(), listener = %listener_name, "Listener added");
        } else {
            trace!(
                event = %self.name(),
                listener = %listener_name,
                "Listener already registered"
            );
        }
    }

    /// Unregister a listener.
    ///
    /// Returns `true` if the listener was registered and has been removed.
    pub fn remove_listener(&self, listener: &Arc<dyn EventListener<C>>) -> bool {
        let removed = self.lock().remove(&ListenerHandle(Arc::clone(listener)));

        if removed {
            debug!(event = %self.name(), listener = %listener.name(), "Listener removed");
        }

        removed
    }

    /// Check if any listener is registered.
    #[must_use]
    pub fn has_listeners(&self) -> bool {
        !self.lock().is_empty()
    }

    /// Get the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    /// Invoke every registered listener with `(sender, context)`.
    ///
    /// Iteration order is unspecified. The first listener error stops the
    /// broadcast and is returned; later listeners are not invoked.
    pub(crate) fn notify_all(&self, sender: &dyn Any, context: &C) -> EventResult<()> {
        let listeners = self.lock();

        trace!(
            event = %self.name(),
            listener_count = listeners.len(),
            "Raising event"
        );

        for ListenerHandle(listener) in listeners.iter() {
            trace!(event = %self.name(), listener = %listener.name(), "Notifying listener");

            if let Err(source) = listener.on_event(sender, context) {
                debug!(
                    event = %self.name(),
                    listener = %listener.name(),
                    error = %source,
                    "Listener failed, aborting broadcast"
                );
                return Err(EventError::Listener {
                    listener: listener.name().to_string(),
                    source,
                });
            }
        }

        Ok(())
    }
}

impl<C> Default for Notifier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Notifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Notifier");
        out.field("name", &self.name());
        match self.listeners.try_lock() {
            Ok(listeners) => out.field("listener_count", &listeners.len()),
            Err(TryLockError::Poisoned(poisoned)) => {
                out.field("listener_count", &poisoned.into_inner().len())
            },
            Err(TryLockError::WouldBlock) => out.field("listener_count", &"<locked>"),
        };
        out.finish()
    }
}
