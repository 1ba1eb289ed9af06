use anyhow::Result;
use std::process;
use log::{error, info};

use eventbus::{app, cli, logging};

fn main() {
    if let Err(e) = run() {
        error!("Application error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args();
    cli::validate_args(&args)?;

    let config_manager = app::load_configuration(&args)?;

    let log_config = app::configure_logging(&args, &config_manager)?;
    logging::init_logger(log_config)?;

    let demo = app::demo_config(&args, &config_manager)?;
    info!(
        "Supervising {} runners ({} reloads, heartbeat {}ms)",
        demo.runners, demo.reloads, demo.heartbeat_ms
    );

    let supervisor = app::Supervisor::new(demo);
    let summary = supervisor.run()?;

    print!("{}", summary);
    Ok(())
}
