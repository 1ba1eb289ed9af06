//! Publish observer that logs each event and counts it by code

use std::collections::BTreeMap;
use parking_lot::Mutex;

use crate::bus::{LogObserver, PublishObserver};
use crate::events::{Event, EventCode};

#[derive(Debug, Default)]
pub struct EventTally {
    counts: Mutex<BTreeMap<EventCode, usize>>,
}

impl EventTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, code: EventCode) -> usize {
        self.counts.lock().get(&code).copied().unwrap_or(0)
    }

    /// Per-code counts, in code order
    pub fn snapshot(&self) -> BTreeMap<EventCode, usize> {
        self.counts.lock().clone()
    }
}

impl PublishObserver for EventTally {
    fn on_publish(&self, event: &Event) {
        LogObserver.on_publish(event);
        *self.counts.lock().entry(event.code).or_insert(0) += 1;
    }
}
