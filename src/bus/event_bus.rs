//! Event Bus
//!
//! Central registry of subscribers and the broadcast/termination protocols
//! layered on it.
//!
//! The registry and the bus mode share a single reader/writer lock:
//! - `publish` holds it shared for the whole delivery loop, so concurrent
//!   publishes proceed together but never see a registry mutated mid-iteration.
//! - `register`, `unregister` and the reload mode toggles hold it exclusively.
//!
//! When `unregister` removes the last subscriber it fires exactly one
//! completion signal under the same write guard: `reloaded` while a reload
//! is in flight, `done` otherwise.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use parking_lot::RwLock;
use log::{debug, trace};

use crate::bus::observer::LogObserver;
use crate::bus::signal::CompletionSignal;
use crate::bus::traits::{PublishObserver, Publisher, Subscriber};
use crate::events::{Event, GLOBAL_SHUTDOWN};

/// Registry key: the address of the subscriber's shared allocation
///
/// The bus keeps the `Arc` alive while registered, so the address cannot be
/// reused by another subscriber for as long as the key is in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

impl SubscriberId {
    pub fn of<S: Subscriber + ?Sized>(subscriber: &Arc<S>) -> Self {
        Self(Arc::as_ptr(subscriber).cast::<()>() as usize)
    }
}

/// Whether a reload is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusMode {
    Idle,
    Reloading,
}

struct BusState {
    registry: HashMap<SubscriberId, Arc<dyn Subscriber>>,
    mode: BusMode,
}

/// In-process broadcast bus shared by a supervisor and its runners
pub struct EventBus {
    state: RwLock<BusState>,
    done: CompletionSignal,
    reloaded: CompletionSignal,
    observer: Arc<dyn PublishObserver>,
}

impl EventBus {
    /// Create an empty bus that logs each published event at debug level
    pub fn new() -> Self {
        Self::with_observer(Arc::new(LogObserver))
    }

    /// Create an empty bus with a custom publish observer
    pub fn with_observer(observer: Arc<dyn PublishObserver>) -> Self {
        Self {
            state: RwLock::new(BusState {
                registry: HashMap::new(),
                mode: BusMode::Idle,
            }),
            done: CompletionSignal::new("done"),
            reloaded: CompletionSignal::new("reloaded"),
            observer,
        }
    }

    /// Add a subscriber. Registering the same handle twice is a no-op.
    pub fn register(&self, subscriber: Arc<dyn Subscriber>) {
        let id = SubscriberId::of(&subscriber);
        let name = subscriber.subscriber_name().to_string();

        let mut state = self.state.write();
        if state.registry.insert(id, subscriber).is_none() {
            debug!("Registered '{}' ({} subscribers)", name, state.registry.len());
        }
    }

    /// Remove a subscriber if present.
    ///
    /// If this empties the registry, signals whoever is waiting on the bus.
    pub fn unregister<S: Subscriber + ?Sized>(&self, subscriber: &Arc<S>) {
        let id = SubscriberId::of(subscriber);

        let mut state = self.state.write();
        let Some(removed) = state.registry.remove(&id) else {
            trace!("Unregister of unknown '{}' ignored", subscriber.subscriber_name());
            return;
        };
        debug!(
            "Unregistered '{}' ({} subscribers)",
            removed.subscriber_name(),
            state.registry.len()
        );

        if state.registry.is_empty() {
            match state.mode {
                BusMode::Reloading => {
                    debug!("Last subscriber left during reload");
                    self.reloaded.fire();
                }
                BusMode::Idle => {
                    debug!("Last subscriber left; bus is done");
                    self.done.fire();
                }
            }
        }
    }

    /// Deliver an event to every registered subscriber.
    ///
    /// A panic raised by a subscriber propagates to the caller.
    pub fn publish(&self, event: Event) {
        self.observer.on_publish(&event);

        let state = self.state.read();
        for subscriber in state.registry.values() {
            subscriber.receive(&event);
        }
    }

    /// Stop every subscriber without retiring the bus.
    ///
    /// Publishes [`GLOBAL_SHUTDOWN`] and blocks until the registry has
    /// emptied. Returns immediately if nobody was registered.
    ///
    /// Only one thread may reload at a time; concurrent reloads share the
    /// single `reloaded` signal.
    pub fn reload(&self) {
        let populated = {
            let mut state = self.state.write();
            state.mode = BusMode::Reloading;
            self.reloaded.drain();
            !state.registry.is_empty()
        };

        debug!("Reloading ({})", if populated { "waiting for subscribers" } else { "no subscribers" });
        self.publish(GLOBAL_SHUTDOWN);
        if populated {
            self.reloaded.wait();
        }

        let mut state = self.state.write();
        state.mode = BusMode::Idle;
        self.reloaded.drain();
        debug!("Reload complete");
    }

    /// Ask every subscriber to halt. Does not wait.
    pub fn shutdown(&self) {
        self.publish(GLOBAL_SHUTDOWN);
    }

    /// Block until the registry empties outside a reload.
    ///
    /// The signal is retired afterwards; later calls return immediately.
    pub fn wait(&self) {
        self.done.wait();
        self.done.retire();
        debug!("Bus wait complete");
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.read().registry.len()
    }

    pub fn is_registered<S: Subscriber + ?Sized>(&self, subscriber: &Arc<S>) -> bool {
        self.state.read().registry.contains_key(&SubscriberId::of(subscriber))
    }

    pub fn mode(&self) -> BusMode {
        self.state.read().mode
    }

    pub fn is_reloading(&self) -> bool {
        self.mode() == BusMode::Reloading
    }

    /// True once the registry has emptied outside a reload and `wait` has not consumed it yet
    pub fn is_done(&self) -> bool {
        self.done.is_pending()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for EventBus {
    fn publish(&self, event: Event) {
        EventBus::publish(self, event)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("EventBus")
            .field("subscribers", &state.registry.len())
            .field("mode", &state.mode)
            .field("done", &self.done.is_pending())
            .finish()
    }
}
