//! Demo Supervisor Configuration

use std::time::Duration;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Parameters for a supervised demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of runners registered on the bus per generation
    pub runners: usize,
    /// Interval of the heartbeat ticker
    pub heartbeat_ms: u64,
    /// How long each generation runs before it is reloaded or shut down
    pub run_ms: u64,
    /// Reload cycles performed before the final shutdown
    pub reloads: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            runners: 3,
            heartbeat_ms: 100,
            run_ms: 500,
            reloads: 1,
        }
    }
}

impl DemoConfig {
    pub fn heartbeat(&self) -> Duration {
        Duration::from_millis(self.heartbeat_ms)
    }

    pub fn run_time(&self) -> Duration {
        Duration::from_millis(self.run_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.runners == 0 {
            bail!("runners must be at least 1");
        }
        if self.heartbeat_ms == 0 {
            bail!("heartbeat-ms must be greater than 0");
        }
        Ok(())
    }
}
