use clap::Parser;
use anyhow::Result;
use std::path::PathBuf;
use log::debug;

/// Supervise demo runners over an in-process event bus
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "eventbus")]
#[command(about = "Supervise a set of runners coordinated through an in-process event bus")]
#[command(version)]
pub struct Args {
    /// Number of runners per generation
    #[arg(short = 'n', long, value_name = "N")]
    pub runners: Option<usize>,

    /// Heartbeat interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub heartbeat_ms: Option<u64>,

    /// How long each generation runs, in milliseconds
    #[arg(long, value_name = "MS")]
    pub run_ms: Option<u64>,

    /// Reload cycles before the final shutdown
    #[arg(long, value_name = "N")]
    pub reloads: Option<usize>,

    /// Verbose output (debug level logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (error level logging only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug output (trace level logging)
    #[arg(long)]
    pub debug: bool,

    /// Log format: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log file path for file output
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level for file output (independent of console level)
    #[arg(long, value_name = "LEVEL")]
    pub log_file_level: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Configuration section name
    #[arg(long, value_name = "SECTION")]
    pub config_name: Option<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    let args = Args::parse();
    debug!("Parsed CLI arguments: {:?}", args);
    args
}

/// Validate CLI argument combinations
pub fn validate_args(args: &Args) -> Result<()> {
    let log_flags_count = [args.verbose, args.quiet, args.debug]
        .iter()
        .filter(|&&flag| flag)
        .count();

    if log_flags_count > 1 {
        return Err(anyhow::anyhow!(
            "Conflicting log level flags: only one of --verbose, --quiet, or --debug may be specified"
        ));
    }

    match args.log_format.to_lowercase().as_str() {
        "text" | "json" => {}
        _ => {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Valid options: text, json",
                args.log_format
            ))
        }
    }

    if let Some(ref level) = args.log_file_level {
        crate::logging::parse_log_level(level)?;
    }

    if args.log_file_level.is_some() && args.log_file.is_none() {
        return Err(anyhow::anyhow!("--log-file-level requires --log-file to be specified"));
    }

    if args.runners == Some(0) {
        return Err(anyhow::anyhow!("--runners must be at least 1"));
    }

    if args.heartbeat_ms == Some(0) {
        return Err(anyhow::anyhow!("--heartbeat-ms must be greater than 0"));
    }

    Ok(())
}
