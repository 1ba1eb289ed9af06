//! Channel-backed Subscriber
//!
//! [`EventHandler`] is the standard way for a runner to take part in the
//! bus: events delivered by the bus are queued on the handler's channel and
//! consumed by the runner's own thread.
//!
//! ```
//! use std::sync::Arc;
//! use eventbus::bus::{EventBus, EventHandler};
//! use eventbus::events::{EventCode, GLOBAL_SHUTDOWN};
//!
//! let bus = Arc::new(EventBus::new());
//! let handler = EventHandler::new("web", Arc::clone(&bus));
//! handler.subscribe();
//!
//! bus.shutdown();
//! assert_eq!(handler.recv(), GLOBAL_SHUTDOWN);
//!
//! handler.unsubscribe();
//! bus.wait();
//! ```

use std::sync::Arc;
use std::time::Duration;
use crossbeam_channel::{self, Receiver, RecvTimeoutError, Sender};
use parking_lot::RwLock;
use log::trace;

use crate::bus::event_bus::EventBus;
use crate::bus::traits::{Publisher, Subscriber};
use crate::events::{Event, QUIT_BY_CLOSE};

/// The registered half of an [`EventHandler`]
struct Inbox {
    name: String,
    sender: RwLock<Option<Sender<Event>>>,
}

impl Subscriber for Inbox {
    fn receive(&self, event: &Event) {
        let sender = self.sender.read();
        let Some(sender) = sender.as_ref() else {
            panic!("event {} delivered to closed handler '{}'", event, self.name);
        };
        if sender.send(event.clone()).is_err() {
            panic!("event {} delivered to dropped handler '{}'", event, self.name);
        }
    }

    fn subscriber_name(&self) -> &str {
        &self.name
    }
}

/// Subscriber/publisher pair owned by a single runner
pub struct EventHandler {
    inbox: Arc<Inbox>,
    receiver: Receiver<Event>,
    bus: Arc<EventBus>,
}

impl EventHandler {
    pub fn new(name: impl Into<String>, bus: Arc<EventBus>) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            inbox: Arc::new(Inbox {
                name: name.into(),
                sender: RwLock::new(Some(sender)),
            }),
            receiver,
            bus,
        }
    }

    pub fn name(&self) -> &str {
        &self.inbox.name
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Register on the bus. Idempotent.
    pub fn subscribe(&self) {
        self.bus.register(self.inbox.clone());
    }

    /// Leave the bus. Idempotent.
    pub fn unsubscribe(&self) {
        self.bus.unregister(&self.inbox);
    }

    pub fn is_subscribed(&self) -> bool {
        self.bus.is_registered(&self.inbox)
    }

    /// Broadcast an event to every subscriber, including this one if registered
    pub fn publish(&self, event: Event) {
        self.bus.publish(event);
    }

    /// Receiving end, for use in `crossbeam_channel::select!`
    pub fn receiver(&self) -> &Receiver<Event> {
        &self.receiver
    }

    /// Next queued event; [`QUIT_BY_CLOSE`] once closed and drained
    pub fn recv(&self) -> Event {
        self.receiver.recv().unwrap_or(QUIT_BY_CLOSE)
    }

    /// Like [`recv`](Self::recv) but gives up after `timeout`
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(QUIT_BY_CLOSE),
        }
    }

    /// Tear down the receiving side.
    ///
    /// Events already queued can still be drained. Delivering to a handler
    /// that is closed but still registered panics, so unsubscribe first.
    pub fn close(&self) {
        if self.inbox.sender.write().take().is_some() {
            trace!("Closed handler '{}'", self.inbox.name);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inbox.sender.read().is_none()
    }
}

impl Publisher for EventHandler {
    fn publish(&self, event: Event) {
        EventHandler::publish(self, event)
    }
}
