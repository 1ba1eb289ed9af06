//! # eventbus
//!
//! In-process publish/subscribe event bus that coordinates the lifecycle of
//! a supervised set of long-running runners.
//!
//! - [`events`]: the event code vocabulary and well-known events
//! - [`bus`]: the [`EventBus`](bus::EventBus), subscribers and publish observers
//! - [`timer`]: threads that publish `TimerExpired` events
//! - [`app`]: a demo supervisor driving runners through reload and shutdown

pub mod app;
pub mod bus;
pub mod cli;
pub mod config;
pub mod events;
pub mod logging;
pub mod timer;
