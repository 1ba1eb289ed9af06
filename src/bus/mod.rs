//! In-process Pub/Sub Event Bus
//!
//! Coordination backbone for a supervised set of runners that observe each
//! other's lifecycle transitions without holding direct references.
//!
//! # Architecture
//!
//! - **EventBus**: registry of subscribers, broadcast, and the two
//!   termination protocols (shutdown-and-wait, reload-without-exit)
//! - **Subscribers**: handles registered by identity that receive each event
//!   synchronously (`EventHandler`, `Recorder`, or user types)
//! - **PublishObserver**: diagnostic hook run once per published event
//!
//! # Lifecycle
//!
//! ```text
//!                 register
//!   Idle-Empty ─────────────► Idle-NonEmpty
//!       ▲                          │
//!       └── last unregister ───────┘  fires `done`   (consumed by wait)
//!
//!                 reload()
//!   Idle-NonEmpty ──────────► Reloading-NonEmpty
//!                                  │
//!   Reloading-Empty ◄─ last ───────┘  fires `reloaded` (consumed by reload)
//!       │            unregister
//!       └── reload() returns ──► Idle-Empty
//! ```
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use eventbus::bus::{EventBus, Recorder};
//! use eventbus::events::{Event, EventCode};
//!
//! let bus = EventBus::new();
//! let a = Arc::new(Recorder::new("a"));
//! let b = Arc::new(Recorder::new("b"));
//! bus.register(a.clone());
//! bus.register(b.clone());
//!
//! bus.publish(Event::new(EventCode::StatusHealthy, "x"));
//! assert_eq!(a.events(), vec![Event::new(EventCode::StatusHealthy, "x")]);
//! assert_eq!(b.len(), 1);
//!
//! bus.unregister(&a);
//! bus.unregister(&b);
//! bus.wait();
//! ```

pub mod traits;
pub mod event_bus;
pub mod handler;
pub mod observer;
mod signal;


pub use event_bus::{BusMode, EventBus, SubscriberId};
pub use handler::EventHandler;
pub use observer::{LogObserver, Recorder};
pub use traits::{PublishObserver, Publisher, Subscriber};
