//! Demo supervisor application built on the event bus

pub mod config;
pub mod initialization;
pub mod runner;
pub mod supervisor;
pub mod tally;

pub use config::DemoConfig;
pub use initialization::{configure_logging, demo_config, load_configuration};
pub use runner::{DemoRunner, RunnerReport};
pub use supervisor::{RunSummary, Supervisor};
pub use tally::EventTally;
