//! Demo Runner
//!
//! A worker thread that lives on the bus: it reports health on every
//! heartbeat and leaves the bus when asked to shut down.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use anyhow::{anyhow, Context, Result};
use log::{debug, info};

use crate::bus::{EventBus, EventHandler};
use crate::events::{Event, EventCode};

/// What a runner saw during its lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerReport {
    pub name: String,
    pub heartbeats: usize,
    pub events_received: usize,
    /// Code of the event that ended the runner
    pub stopped_by: EventCode,
}

/// Handle to a running demo runner thread
pub struct DemoRunner {
    name: String,
    handle: JoinHandle<RunnerReport>,
}

impl DemoRunner {
    /// Register a new runner on the bus and start its thread.
    ///
    /// Registration happens before this returns, so a reload or shutdown
    /// issued right after is guaranteed to wait for this runner. The thread
    /// registers itself; a runner whose thread never starts is never on the bus.
    pub fn start(name: impl Into<String>, bus: Arc<EventBus>, heartbeat: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let heartbeat = heartbeat.into();
        let handler = EventHandler::new(name.clone(), bus);
        let (ready_tx, ready_rx) = crossbeam_channel::bounded(1);

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                handler.subscribe();
                let _ = ready_tx.send(());
                run_loop(handler, &heartbeat)
            })
            .with_context(|| format!("Failed to start runner '{}'", name))?;

        ready_rx
            .recv()
            .map_err(|_| anyhow!("Runner '{}' exited before joining the bus", name))?;

        Ok(Self { name, handle })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn join(self) -> Result<RunnerReport> {
        self.handle
            .join()
            .map_err(|_| anyhow!("Runner '{}' panicked", self.name))
    }
}

fn run_loop(handler: EventHandler, heartbeat: &str) -> RunnerReport {
    let name = handler.name().to_string();
    let mut heartbeats = 0;
    let mut events_received = 0;
    debug!("Runner '{}' started", name);

    let stopped_by = loop {
        let event = handler.recv();
        events_received += 1;

        match event.code {
            EventCode::TimerExpired if event.source() == heartbeat => {
                heartbeats += 1;
                handler.publish(Event::new(EventCode::StatusHealthy, name.clone()));
            }
            EventCode::Shutdown | EventCode::Quit => break event.code,
            _ => {}
        }
    };

    handler.publish(Event::new(EventCode::Stopping, name.clone()));
    handler.unsubscribe();
    handler.close();
    handler.publish(Event::new(EventCode::Stopped, name.clone()));

    info!("Runner '{}' stopped after {} heartbeats", name, heartbeats);
    RunnerReport {
        name,
        heartbeats,
        events_received,
        stopped_by,
    }
}
