//! Completion Signals
//!
//! A single-slot notification used by the bus to tell a blocked lifecycle
//! owner that the registry has emptied.

use std::sync::atomic::{AtomicBool, Ordering};
use crossbeam_channel::{self, Receiver, Sender, TrySendError};
use log::{trace, warn};

/// One pending notification at most; firing while one is pending is a no-op
#[derive(Debug)]
pub(crate) struct CompletionSignal {
    name: &'static str,
    sender: Sender<()>,
    receiver: Receiver<()>,
    retired: AtomicBool,
}

impl CompletionSignal {
    pub(crate) fn new(name: &'static str) -> Self {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        Self {
            name,
            sender,
            receiver,
            retired: AtomicBool::new(false),
        }
    }

    /// Post the notification. Returns false if it was dropped.
    pub(crate) fn fire(&self) -> bool {
        if self.is_retired() {
            warn!("'{}' signal fired after it was retired; ignoring", self.name);
            return false;
        }

        match self.sender.try_send(()) {
            Ok(()) => {
                trace!("'{}' signal fired", self.name);
                true
            }
            Err(TrySendError::Full(())) => {
                warn!("'{}' signal already pending; dropping duplicate", self.name);
                false
            }
            // both ends live in self
            Err(TrySendError::Disconnected(())) => false,
        }
    }

    /// Block until the notification arrives, consuming it
    pub(crate) fn wait(&self) {
        if self.is_retired() {
            warn!("'{}' signal waited on after it was retired", self.name);
            return;
        }
        // The sender is owned by self, so recv can only return Ok.
        let _ = self.receiver.recv();
        trace!("'{}' signal received", self.name);
    }

    /// Discard a stale pending notification
    pub(crate) fn drain(&self) -> bool {
        self.receiver.try_recv().is_ok()
    }

    pub(crate) fn is_pending(&self) -> bool {
        !self.receiver.is_empty()
    }

    /// Permanently disable the signal
    pub(crate) fn retire(&self) {
        self.retired.store(true, Ordering::Release);
        self.drain();
    }

    pub(crate) fn is_retired(&self) -> bool {
        self.retired.load(Ordering::Acquire)
    }
}
