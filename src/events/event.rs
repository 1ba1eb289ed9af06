//! Event Values
//!
//! An [`Event`] pairs an [`EventCode`] with the free-text name of whatever
//! emitted it. The well-known events are plain constants.

use std::borrow::Cow;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::events::code::EventCode;

/// Immutable notification broadcast over the bus
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub code: EventCode,
    pub source: Cow<'static, str>,
}

impl Event {
    /// Create an event with a runtime source label
    pub fn new(code: EventCode, source: impl Into<String>) -> Self {
        Self {
            code,
            source: Cow::Owned(source.into()),
        }
    }

    /// Create an event whose source lives for the whole program
    pub const fn from_static(code: EventCode, source: &'static str) -> Self {
        Self {
            code,
            source: Cow::Borrowed(source),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// True for the placeholder nil-event
    pub fn is_none(&self) -> bool {
        self.code == EventCode::None
    }
}

impl Default for Event {
    fn default() -> Self {
        NON_EVENT
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.code, self.source)
    }
}

/// Published once the bus and its runners are up
pub const GLOBAL_STARTUP: Event = Event::from_static(EventCode::Startup, "global");

/// Asks every subscriber to halt
pub const GLOBAL_SHUTDOWN: Event = Event::from_static(EventCode::Shutdown, "global");

/// Emitted when an input channel closes underneath a runner
pub const QUIT_BY_CLOSE: Event = Event::from_static(EventCode::Quit, "closed");

pub const NON_EVENT: Event = Event::from_static(EventCode::None, "");
