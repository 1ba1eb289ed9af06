//! Built-in observers and subscribers for diagnostics

use parking_lot::Mutex;
use log::debug;

use crate::bus::traits::{PublishObserver, Subscriber};
use crate::events::{Event, EventCode};

/// Logs every published event at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl PublishObserver for LogObserver {
    fn on_publish(&self, event: &Event) {
        debug!(target: "eventbus::bus", "event: {}", event);
    }
}

/// Subscriber that keeps every event it receives, in arrival order
#[derive(Debug, Default)]
pub struct Recorder {
    name: String,
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything received so far
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn count_of(&self, code: EventCode) -> usize {
        self.events.lock().iter().filter(|e| e.code == code).count()
    }
}

impl Subscriber for Recorder {
    fn receive(&self, event: &Event) {
        self.events.lock().push(event.clone());
    }

    fn subscriber_name(&self) -> &str {
        &self.name
    }
}
