//! Mock listeners for testing.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tidings_events::{EventListener, ListenerResult};

use crate::fixtures::describe_sender;

/// Listener that records every `(sender, context)` pair it receives.
///
/// Senders are stored as their [`describe_sender`] rendering.
#[derive(Debug)]
pub struct RecordingListener<C> {
    name: String,
    received: Mutex<Vec<(String, C)>>,
}

impl<C: Clone> RecordingListener<C> {
    /// Create a new recording listener.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            received: Mutex::new(Vec::new()),
        })
    }

    /// Get every recorded `(sender, context)` pair in delivery order.
    #[must_use]
    pub fn received(&self) -> Vec<(String, C)> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Get the recorded contexts in delivery order.
    #[must_use]
    pub fn contexts(&self) -> Vec<C> {
        self.received().into_iter().map(|(_, ctx)| ctx).collect()
    }

    /// Get the number of recorded deliveries.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl<C: Clone + Send> EventListener<C> for RecordingListener<C> {
    fn on_event(&self, sender: &dyn Any, context: &C) -> ListenerResult {
        if let Ok(mut received) = self.received.lock() {
            received.push((describe_sender(sender), context.clone()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Listener that only counts deliveries, for any context type.
#[derive(Debug, Default)]
pub struct CountingListener {
    count: AtomicUsize,
}

impl CountingListener {
    /// Create a new counting listener.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Get the number of deliveries so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<C> EventListener<C> for CountingListener {
    fn on_event(&self, _sender: &dyn Any, _context: &C) -> ListenerResult {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Listener that fails every delivery with a fixed message.
#[derive(Debug)]
pub struct FailingListener {
    message: String,
    attempts: AtomicUsize,
}

impl FailingListener {
    /// Create a listener failing with `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            message: message.into(),
            attempts: AtomicUsize::new(0),
        })
    }

    /// Get the number of deliveries attempted.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl<C> EventListener<C> for FailingListener {
    fn on_event(&self, _sender: &dyn Any, _context: &C) -> ListenerResult {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(self.message.clone().into())
    }

    fn name(&self) -> &str {
        "failing"
    }
}
