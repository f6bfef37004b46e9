//! Integration tests for events shared across threads.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use tidings_events::{Event, EventListener, FnListener, PrivilegedEvent, PublicEvent};
use tidings_test::{CountingListener, as_listener, test_key, test_sender};

const THREADS: usize = 8;
const ROUNDS: usize = 200;
#[allow(clippy::arithmetic_side_effects)]
const RAISES: usize = THREADS * ROUNDS;

#[test]
fn test_concurrent_add_remove_keeps_set_consistent() {
    let event: PublicEvent<usize> = PublicEvent::new();
    let keeper = CountingListener::new();
    event.add_listener(as_listener(&keeper));

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for round in 0..ROUNDS {
                    let transient: Arc<dyn EventListener<usize>> = CountingListener::new();
                    event.add_listener(Arc::clone(&transient));
                    event.raise(&test_sender(), &round).unwrap();
                    assert!(event.remove_listener(&transient));
                }
            });
        }
    });

    // Only the permanent listener is left, and it saw every raise.
    assert_eq!(event.listener_count(), 1);
    assert_eq!(keeper.count(), RAISES);
}

#[test]
fn test_concurrent_raises_deliver_every_notification() {
    let key = test_key("producer");
    let event: PrivilegedEvent<usize, String> = PrivilegedEvent::new(Arc::clone(&key));
    let counters: Vec<_> = (0..4).map(|_| CountingListener::new()).collect();
    for counter in &counters {
        event.add_listener(as_listener(counter));
    }

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for round in 0..ROUNDS {
                    event.raise(&key, &test_sender(), &round).unwrap();
                }
            });
        }
    });

    assert!(counters.iter().all(|c| c.count() == RAISES));
}

#[test]
fn test_broadcast_holds_lock_against_other_operations() {
    let event: Arc<PublicEvent<()>> = Arc::new(PublicEvent::new());
    let entered = Arc::new(Barrier::new(2));
    let in_listener = Arc::new(AtomicBool::new(false));
    let observed_during_broadcast = Arc::new(AtomicUsize::new(0));

    let slow = {
        let entered = Arc::clone(&entered);
        let in_listener = Arc::clone(&in_listener);
        FnListener::new("slow", move |_: &dyn std::any::Any, _: &()| {
            in_listener.store(true, Ordering::SeqCst);
            entered.wait();
            thread::sleep(Duration::from_millis(50));
            in_listener.store(false, Ordering::SeqCst);
            Ok(())
        })
    };
    event.add_listener(Arc::new(slow));

    thread::scope(|s| {
        s.spawn(|| event.raise(&test_sender(), &()).unwrap());

        entered.wait();
        // Blocks until the broadcast releases the lock.
        let _ = event.has_listeners();
        if in_listener.load(Ordering::SeqCst) {
            observed_during_broadcast.fetch_add(1, Ordering::SeqCst);
        }
    });

    assert_eq!(observed_during_broadcast.load(Ordering::SeqCst), 0);
}

#[test]
fn test_independent_events_do_not_block_each_other() {
    let first: PublicEvent<()> = PublicEvent::new();
    let second: PublicEvent<()> = PublicEvent::new();
    let entered = Arc::new(Barrier::new(2));
    let second_done = Arc::new(AtomicBool::new(false));

    let waiter = {
        let entered = Arc::clone(&entered);
        let second_done = Arc::clone(&second_done);
        FnListener::new("waits-for-second", move |_: &dyn std::any::Any, _: &()| {
            entered.wait();
            // Spin until the other event has been used from another thread.
            while !second_done.load(Ordering::SeqCst) {
                thread::yield_now();
            }
            Ok(())
        })
    };
    first.add_listener(Arc::new(waiter));
    let second_counter = CountingListener::new();
    second.add_listener(as_listener(&second_counter));

    thread::scope(|s| {
        s.spawn(|| first.raise(&test_sender(), &()).unwrap());

        entered.wait();
        second.raise(&test_sender(), &()).unwrap();
        second_done.store(true, Ordering::SeqCst);
    });

    assert_eq!(second_counter.count(), 1);
}
