//! Event Vocabulary
//!
//! Typed lifecycle codes and the event values that flow over the
//! [`EventBus`](crate::bus::EventBus).
//!
//! # Example Usage
//!
//! ```
//! use eventbus::events::{Event, EventCode, GLOBAL_SHUTDOWN};
//!
//! let event = Event::new(EventCode::StatusHealthy, "web");
//! assert_eq!(event.to_string(), "{StatusHealthy web}");
//! assert_eq!(GLOBAL_SHUTDOWN.code, EventCode::Shutdown);
//! assert_eq!("TimerExpired".parse::<EventCode>().unwrap(), EventCode::TimerExpired);
//! ```

pub mod code;
pub mod event;
pub mod error;


pub use code::EventCode;
pub use event::{Event, GLOBAL_SHUTDOWN, GLOBAL_STARTUP, NON_EVENT, QUIT_BY_CLOSE};
pub use error::{EventError, EventResult};
