//! Application initialization and configuration

use anyhow::Result;
use log::{debug, LevelFilter};
use std::str::FromStr;
use crate::app::config::DemoConfig;
use crate::{cli, config, logging};

pub fn load_configuration(args: &cli::Args) -> Result<config::ConfigManager> {
    let mut manager = match &args.config_file {
        Some(config_file) => config::ConfigManager::load_from_file(config_file.clone())?,
        None => config::ConfigManager::load()?,
    };

    if let Some(section_name) = &args.config_name {
        manager.select_section(section_name.clone());
    }

    Ok(manager)
}

pub fn configure_logging(args: &cli::Args, config: &config::ConfigManager) -> Result<logging::LogConfig> {
    let console_level = if args.debug {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        match config.get_log_level("base", "console-level") {
            Ok(Some(level)) => level,
            Ok(None) => LevelFilter::Info,
            Err(e) => {
                debug!("Invalid console-level in config, using default: {}", e);
                LevelFilter::Info
            }
        }
    };

    let format = if args.log_format != "text" {
        logging::LogFormat::from_str(&args.log_format).map_err(|e| anyhow::anyhow!(e))?
    } else {
        config
            .get_value("base", "log-format")
            .and_then(|format_str| logging::LogFormat::from_str(format_str).ok())
            .unwrap_or(logging::LogFormat::Text)
    };

    let log_file_path = args.log_file.clone().or_else(|| config.get_path("base", "log-file"));

    let file_log_level = match &args.log_file_level {
        Some(level_str) => Some(logging::parse_log_level(level_str)?),
        None => match config.get_log_level("base", "file-log-level") {
            Ok(level) => level,
            Err(e) => {
                debug!("Invalid file-log-level in config, ignoring: {}", e);
                None
            }
        },
    };

    let (destination, file_level) = match (log_file_path, file_log_level) {
        (Some(file_path), level) => (logging::LogDestination::Both(file_path), Some(level.unwrap_or(console_level))),
        (None, None) => (logging::LogDestination::Console, None),
        (None, Some(_)) => return Err(anyhow::anyhow!("Log file level specified without log file")),
    };

    Ok(logging::LogConfig {
        console_level,
        file_level,
        format,
        destination,
    })
}

/// Demo settings from the config file, overridden by command-line flags
pub fn demo_config(args: &cli::Args, config: &config::ConfigManager) -> Result<DemoConfig> {
    let mut demo = config.get_demo_config()?;

    if let Some(runners) = args.runners {
        demo.runners = runners;
    }
    if let Some(heartbeat_ms) = args.heartbeat_ms {
        demo.heartbeat_ms = heartbeat_ms;
    }
    if let Some(run_ms) = args.run_ms {
        demo.run_ms = run_ms;
    }
    if let Some(reloads) = args.reloads {
        demo.reloads = reloads;
    }

    demo.validate()?;
    debug!("Demo configuration: {:?}", demo);
    Ok(demo)
}
