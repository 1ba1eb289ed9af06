//! Event Codes
//!
//! The closed set of lifecycle notifications a runner can emit or react to.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::events::error::EventError;

/// Kind of lifecycle notification carried by an [`Event`](crate::events::Event)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventCode {
    /// Placeholder nil-event
    None = 0,
    /// A runner's process completed with a zero exit code
    ExitSuccess,
    /// A runner's process completed with a non-zero exit code
    ExitFailed,
    /// A runner is about to stop
    Stopping,
    /// A runner has stopped
    Stopped,
    StatusHealthy,
    StatusUnhealthy,
    StatusChanged,
    TimerExpired,
    EnterMaintenance,
    ExitMaintenance,
    Error,
    Quit,
    /// Fired once after the bus is set up and the event loop is running
    Startup,
    /// Fired when all runners must halt
    Shutdown,
}

impl EventCode {
    /// Every code, in discriminant order
    pub const ALL: [EventCode; 15] = [
        EventCode::None,
        EventCode::ExitSuccess,
        EventCode::ExitFailed,
        EventCode::Stopping,
        EventCode::Stopped,
        EventCode::StatusHealthy,
        EventCode::StatusUnhealthy,
        EventCode::StatusChanged,
        EventCode::TimerExpired,
        EventCode::EnterMaintenance,
        EventCode::ExitMaintenance,
        EventCode::Error,
        EventCode::Quit,
        EventCode::Startup,
        EventCode::Shutdown,
    ];

    /// Variant name, as used by `Display` and `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            EventCode::None => "None",
            EventCode::ExitSuccess => "ExitSuccess",
            EventCode::ExitFailed => "ExitFailed",
            EventCode::Stopping => "Stopping",
            EventCode::Stopped => "Stopped",
            EventCode::StatusHealthy => "StatusHealthy",
            EventCode::StatusUnhealthy => "StatusUnhealthy",
            EventCode::StatusChanged => "StatusChanged",
            EventCode::TimerExpired => "TimerExpired",
            EventCode::EnterMaintenance => "EnterMaintenance",
            EventCode::ExitMaintenance => "ExitMaintenance",
            EventCode::Error => "Error",
            EventCode::Quit => "Quit",
            EventCode::Startup => "Startup",
            EventCode::Shutdown => "Shutdown",
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventCode {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCode::ALL
            .iter()
            .copied()
            .find(|code| code.name() == s)
            .ok_or_else(|| EventError::unknown_code(s))
    }
}

impl From<EventCode> for u8 {
    fn from(code: EventCode) -> Self {
        code as u8
    }
}

impl TryFrom<u8> for EventCode {
    type Error = EventError;

    fn try_from(value: u8) -> Result<Self, EventError> {
        EventCode::ALL
            .get(value as usize)
            .copied()
            .ok_or(EventError::UnknownDiscriminant(value))
    }
}
