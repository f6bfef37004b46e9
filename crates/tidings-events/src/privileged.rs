//! An event only privileged callers may raise.
//!
//! Authorization is fixed at construction and is one of:
//! - **Identity**: the presented key must be the very object the event was
//!   built with. An equal value living elsewhere is rejected.
//! - **Predicate**: the presented key must satisfy a caller-supplied check.
//!   The stored key is kept but not compared.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tidings_core::contract;
use tracing::warn;

use crate::error::{EventError, EventResult};
use crate::event::Event;
use crate::notifier::Notifier;

/// Predicate deciding whether a presented key may raise the event.
type KeyPredicate<K> = Box<dyn Fn(&K) -> bool + Send + Sync>;

enum KeyCheck<K: ?Sized> {
    Identity,
    Predicate(KeyPredicate<K>),
}

/// A gated event: raising requires presenting an accepted key.
///
/// Any key type can be used to build the event and to subscribe to it, but
/// [`raise`](Self::raise) needs `K: Debug` so that a rejected key can be
/// reported in [`EventError::Unauthorized`]. Wrap a key type lacking `Debug`
/// in a newtype with a redacted `Debug` impl to make it raisable.
pub struct PrivilegedEvent<C, K: ?Sized> {
    notifier: Notifier<C>,
    key: Arc<K>,
    check: KeyCheck<K>,
}

impl<C, K: ?Sized> PrivilegedEvent<C, K> {
    /// Create an event raisable only with `key` itself.
    ///
    /// Keep a clone of the `Arc` to raise the event later; the comparison is
    /// by address, never by value.
    /// Raising requires `K: Debug`; see [`PrivilegedEvent`].
    #[must_use]
    pub fn new(key: Arc<K>) -> Self {
        Self {
            notifier: Notifier::new(),
            key,
            check: KeyCheck::Identity,
        }
    }

    /// Create an event raisable with any key `predicate` accepts.
    #[must_use]
    pub fn with_predicate<P>(key: Arc<K>, predicate: P) -> Self
    where
        P: Fn(&K) -> bool + Send + Sync + 'static,
    {
        Self {
            notifier: Notifier::new(),
            key,
            check: KeyCheck::Predicate(Box::new(predicate)),
        }
    }

    /// Start building an event with optional name and predicate.
    #[must_use]
    pub fn builder() -> PrivilegedEventBuilder<C, K> {
        PrivilegedEventBuilder::new()
    }

    /// Check if this event authorizes by predicate rather than identity.
    #[must_use]
    pub fn uses_predicate(&self) -> bool {
        matches!(self.check, KeyCheck::Predicate(_))
    }

    /// Get the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.notifier.listener_count()
    }

    fn authorizes(&self, key: &K) -> bool {
        match &self.check {
            KeyCheck::Identity => std::ptr::addr_eq(key, Arc::as_ptr(&self.key)),
            KeyCheck::Predicate(predicate) => predicate(key),
        }
    }
}

impl<C, K: ?Sized + fmt::Debug> PrivilegedEvent<C, K> {
    /// Notify every registered listener, provided `key` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Unauthorized`] carrying the rejected key if the
    /// check fails; no listener is notified. Returns
    /// [`EventError::Listener`] if a listener fails.
    pub fn raise(&self, key: &K, sender: &dyn Any, context: &C) -> EventResult<()> {
        if !self.authorizes(key) {
            warn!(event = %self.notifier.name(), key = ?key, "Rejected raise with invalid key");
            return Err(EventError::Unauthorized {
                key: format!("{key:?}"),
            });
        }

        self.notifier.notify_all(sender, context)
    }
}

impl<C, K: ?Sized> Event<C> for PrivilegedEvent<C, K> {
    fn notifier(&self) -> &Notifier<C> {
        &self.notifier
    }
}

impl<C, K: ?Sized> fmt::Debug for PrivilegedEvent<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivilegedEvent")
            .field("notifier", &self.notifier)
            .field("uses_predicate", &self.uses_predicate())
            .finish_non_exhaustive()
    }
}

/// Builder for [`PrivilegedEvent`].
pub struct PrivilegedEventBuilder<C, K: ?Sized> {
    name: Option<String>,
    key: Option<Arc<K>>,
    predicate: Option<KeyPredicate<K>>,
    _context: std::marker::PhantomData<fn(&C)>,
}

impl<C, K: ?Sized> PrivilegedEventBuilder<C, K> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            key: None,
            predicate: None,
            _context: std::marker::PhantomData,
        }
    }

    /// Set the key the event is built around.
    #[must_use]
    pub fn key(mut self, key: Arc<K>) -> Self {
        self.key = Some(key);
        self
    }

    /// Authorize by predicate instead of by key identity.
    #[must_use]
    pub fn predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&K) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Label the event in log records.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the event.
    ///
    /// # Errors
    ///
    /// Returns a null-argument contract error if no key was set, or an
    /// invalid-argument contract error if the name is blank.
    pub fn build(self) -> EventResult<PrivilegedEvent<C, K>> {
        let key = contract::non_null_named(self.key, "key")?;

        let notifier = match self.name {
            Some(name) => {
                contract::require_that(!name.trim().is_empty(), "event name cannot be blank")?;
                Notifier::named(name)
            },
            None => Notifier::new(),
        };

        let check = match self.predicate {
            Some(predicate) => KeyCheck::Predicate(predicate),
            None => KeyCheck::Identity,
        };

        Ok(PrivilegedEvent {
            notifier,
            key,
            check,
        })
    }
}

impl<C, K: ?Sized> Default for PrivilegedEventBuilder<C, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K: ?Sized> fmt::Debug for PrivilegedEventBuilder<C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivilegedEventBuilder")
            .field("name", &self.name)
            .field("has_key", &self.key.is_some())
            .field("has_predicate", &self.predicate.is_some())
            .finish()
    }
}
