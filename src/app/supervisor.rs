//! Demo Supervisor
//!
//! Drives a set of runners over one bus through startup, a number of
//! reload cycles and a final shutdown.
//!
//! ```text
//! GLOBAL_STARTUP ─► generation 0 ─► reload() ─► generation 1 ─► ... ─► shutdown() + wait()
//!                    (runners)       (runners leave)  (new runners)        (runners leave)
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::thread;
use anyhow::Result;
use log::{info, warn};

use crate::app::config::DemoConfig;
use crate::app::runner::{DemoRunner, RunnerReport};
use crate::app::tally::EventTally;
use crate::bus::EventBus;
use crate::events::{EventCode, GLOBAL_STARTUP};
use crate::timer::EventTimer;

/// Source label of the heartbeat ticker
pub const HEARTBEAT: &str = "heartbeat";

/// Outcome of a supervised run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub generations: usize,
    pub runners: Vec<RunnerReport>,
    pub published: BTreeMap<EventCode, usize>,
}

impl RunSummary {
    pub fn total_heartbeats(&self) -> usize {
        self.runners.iter().map(|r| r.heartbeats).sum()
    }

    pub fn published(&self, code: EventCode) -> usize {
        self.published.get(&code).copied().unwrap_or(0)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generations: {} | Runners: {} | Heartbeats handled: {}",
            self.generations,
            self.runners.len(),
            self.total_heartbeats()
        )?;
        for (code, count) in &self.published {
            writeln!(f, "  {:<18} {}", code, count)?;
        }
        Ok(())
    }
}

pub struct Supervisor {
    bus: Arc<EventBus>,
    tally: Arc<EventTally>,
    config: DemoConfig,
}

impl Supervisor {
    pub fn new(config: DemoConfig) -> Self {
        let tally = Arc::new(EventTally::new());
        let bus = Arc::new(EventBus::with_observer(tally.clone()));
        Self { bus, tally, config }
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;

        let mut ticker = EventTimer::ticker(Arc::clone(&self.bus), self.config.heartbeat(), HEARTBEAT)?;
        let generations = self.config.reloads + 1;
        let mut reports = Vec::with_capacity(generations * self.config.runners);

        for generation in 0..generations {
            let runners = self.start_generation(generation).map_err(|e| self.abandon(e))?;
            if generation == 0 {
                self.bus.publish(GLOBAL_STARTUP);
            }

            thread::sleep(self.config.run_time());

            if generation + 1 < generations {
                info!("Reloading after generation {}", generation);
                self.bus.reload();
            } else {
                info!("Shutting down after generation {}", generation);
                self.bus.shutdown();
                self.bus.wait();
            }

            for runner in runners {
                reports.push(runner.join().map_err(|e| self.abandon(e))?);
            }
        }

        ticker.cancel();
        Ok(RunSummary {
            generations,
            runners: reports,
            published: self.tally.snapshot(),
        })
    }

    /// Ask every runner still on the bus to stop before the run gives up
    fn abandon(&self, error: anyhow::Error) -> anyhow::Error {
        warn!("Abandoning supervised run: {:#}", error);
        self.bus.shutdown();
        error
    }

    fn start_generation(&self, generation: usize) -> Result<Vec<DemoRunner>> {
        (0..self.config.runners)
            .map(|i| DemoRunner::start(format!("runner-{}.{}", generation, i), Arc::clone(&self.bus), HEARTBEAT))
            .collect()
    }
}
