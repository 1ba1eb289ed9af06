//! Event Timers
//!
//! Background threads that publish `TimerExpired` events named after the
//! timer, either once after a timeout or repeatedly on an interval.

use std::thread::{self, JoinHandle};
use std::time::Duration;
use crossbeam_channel::{self, select, Sender};
use log::{debug, trace};
use thiserror::Error;

use crate::bus::Publisher;
use crate::events::{Event, EventCode};

/// Result type for timer operations
pub type TimerResult<T> = Result<T, TimerError>;

/// Errors that can occur when starting a timer
#[derive(Debug, Error)]
pub enum TimerError {
    /// Ticker interval must be non-zero
    #[error("Timer '{name}' has a zero interval")]
    ZeroInterval { name: String },

    /// OS refused to start the timer thread
    #[error("Failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// How often a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Once(Duration),
    Every(Duration),
}

/// Handle to a running timer thread. Dropping it cancels the timer.
#[derive(Debug)]
pub struct EventTimer {
    name: String,
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl EventTimer {
    /// Publish `{TimerExpired, name}` once after `duration`
    pub fn timeout<P>(publisher: P, duration: Duration, name: impl Into<String>) -> TimerResult<Self>
    where
        P: Publisher + 'static,
    {
        Self::start(publisher, TimerKind::Once(duration), name.into())
    }

    /// Publish `{TimerExpired, name}` every `interval` until cancelled
    pub fn ticker<P>(publisher: P, interval: Duration, name: impl Into<String>) -> TimerResult<Self>
    where
        P: Publisher + 'static,
    {
        let name = name.into();
        if interval.is_zero() {
            return Err(TimerError::ZeroInterval { name });
        }
        Self::start(publisher, TimerKind::Every(interval), name)
    }

    fn start<P>(publisher: P, kind: TimerKind, name: String) -> TimerResult<Self>
    where
        P: Publisher + 'static,
    {
        let (cancel, cancelled) = crossbeam_channel::bounded::<()>(1);
        let event = Event::new(EventCode::TimerExpired, name.clone());

        let handle = thread::Builder::new()
            .name(format!("timer-{}", name))
            .spawn(move || match kind {
                TimerKind::Once(duration) => {
                    let deadline = crossbeam_channel::after(duration);
                    select! {
                        recv(cancelled) -> _ => trace!("Timer '{}' cancelled", event.source),
                        recv(deadline) -> _ => publisher.publish(event),
                    }
                }
                TimerKind::Every(interval) => {
                    let ticks = crossbeam_channel::tick(interval);
                    loop {
                        select! {
                            recv(cancelled) -> _ => break,
                            recv(ticks) -> _ => publisher.publish(event.clone()),
                        }
                    }
                    trace!("Ticker '{}' stopped", event.source);
                }
            })?;

        debug!("Started timer '{}' ({:?})", name, kind);
        Ok(Self {
            name,
            cancel: Some(cancel),
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True once the timer thread has exited (fired or cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Stop the timer and wait for its thread. A no-op if already stopped.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.try_send(());
        }
        if let Some(handle) = self.handle.take() {
            // A panicking publisher already reported itself on that thread.
            let _ = handle.join();
        }
    }
}

impl Drop for EventTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
