// Logging for the eventbus binary
// Installs a `log` backend with timestamped text or JSON-line output
//
// - Output formats: Text and JSON
// - Destinations: Console (stderr), File, or Both
// - Independent levels for console and file output
// - Timestamps formatted as YYYY-MM-DD HH:mm:ss
//
// Library code only talks to the `log` facade; this module is what the
// binary wires up behind it.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::{Context, Result};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}. Valid options: text, json", s)),
        }
    }
}

/// Log destination options
#[derive(Debug, Clone, PartialEq)]
pub enum LogDestination {
    Console,
    File(PathBuf),
    Both(PathBuf),
}

impl LogDestination {
    fn file_path(&self) -> Option<&PathBuf> {
        match self {
            LogDestination::Console => None,
            LogDestination::File(path) | LogDestination::Both(path) => Some(path),
        }
    }
}

/// One JSON log line
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub console_level: LevelFilter,
    pub file_level: Option<LevelFilter>,
    pub format: LogFormat,
    pub destination: LogDestination,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: LevelFilter::Info,
            file_level: None,
            format: LogFormat::Text,
            destination: LogDestination::Console,
        }
    }
}

impl LogConfig {
    /// Most verbose level any destination accepts
    pub fn max_level(&self) -> LevelFilter {
        match self.file_level {
            Some(file_level) if file_level > self.console_level => file_level,
            _ => self.console_level,
        }
    }
}

/// `log::Log` backend for the binary
pub struct BusLogger {
    config: LogConfig,
    file: Option<Mutex<File>>,
}

impl BusLogger {
    pub fn new(config: LogConfig) -> Result<Self> {
        let file = match config.destination.file_path() {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                Some(Mutex::new(file))
            }
            None => None,
        };
        Ok(Self { config, file })
    }

    fn format_timestamp() -> String {
        let now: DateTime<Local> = Local::now();
        now.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn format_text_message(&self, level: Level, message: &str) -> String {
        format!("{} [{}] {}", Self::format_timestamp(), level.to_string().to_uppercase(), message)
    }

    fn format_json_message(&self, level: Level, target: &str, message: &str) -> Result<String> {
        let entry = JsonLogEntry {
            timestamp: Self::format_timestamp(),
            level: level.to_string().to_uppercase(),
            target: target.to_string(),
            message: message.to_string(),
            detail: None,
        };

        serde_json::to_string(&entry).context("Failed to serialize log entry to JSON")
    }

    fn format_record(&self, record: &log::Record) -> String {
        let message = record.args().to_string();
        match self.config.format {
            LogFormat::Text => self.format_text_message(record.level(), &message),
            LogFormat::Json => self
                .format_json_message(record.level(), record.target(), &message)
                .unwrap_or_else(|e| {
                    eprintln!("JSON formatting error: {}. Falling back to text format.", e);
                    self.format_text_message(record.level(), &message)
                }),
        }
    }

    fn should_log_to_console(&self, level: Level) -> bool {
        !matches!(self.config.destination, LogDestination::File(_)) && level <= self.config.console_level
    }

    fn should_log_to_file(&self, level: Level) -> bool {
        match self.config.file_level {
            Some(file_level) => self.file.is_some() && level <= file_level,
            None => false,
        }
    }

    fn write_to_file(&self, line: &str) -> io::Result<()> {
        match &self.file {
            Some(file) => writeln!(file.lock(), "{}", line),
            None => Ok(()),
        }
    }
}

impl log::Log for BusLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.should_log_to_console(metadata.level()) || self.should_log_to_file(metadata.level())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);

        if self.should_log_to_console(record.level()) {
            let _ = writeln!(io::stderr(), "{}", line);
        }
        if self.should_log_to_file(record.level()) {
            if let Err(e) = self.write_to_file(&line) {
                eprintln!("File logging error: {}", e);
            }
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Install the logger as the global `log` backend
pub fn init_logger(config: LogConfig) -> Result<()> {
    let max_level = config.max_level();
    let logger = BusLogger::new(config)?;

    log::set_boxed_logger(Box::new(logger)).context("Failed to set global logger")?;
    log::set_max_level(max_level);

    Ok(())
}

/// Convert string to LevelFilter
pub fn parse_log_level(level_str: &str) -> Result<LevelFilter> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        "off" => Ok(LevelFilter::Off),
        _ => Err(anyhow::anyhow!(
            "Invalid log level: {}. Valid levels: error, warn, info, debug, trace, off",
            level_str
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use log::Log;
    use tempfile::NamedTempFile;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error").unwrap(), LevelFilter::Error);
        assert_eq!(parse_log_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_max_level_prefers_most_verbose() {
        let mut config = LogConfig::default();
        assert_eq!(config.max_level(), LevelFilter::Info);

        config.file_level = Some(LevelFilter::Trace);
        assert_eq!(config.max_level(), LevelFilter::Trace);

        config.file_level = Some(LevelFilter::Error);
        assert_eq!(config.max_level(), LevelFilter::Info);
    }

    #[test]
    fn test_timestamp_format() {
        let timestamp = BusLogger::format_timestamp();
        assert_eq!(timestamp.len(), 19);
        assert_eq!(timestamp.chars().nth(4), Some('-'));
        assert_eq!(timestamp.chars().nth(10), Some(' '));
        assert_eq!(timestamp.chars().nth(13), Some(':'));
        assert!(timestamp.starts_with(&Local::now().year().to_string()));
    }

    #[test]
    fn test_text_and_json_formatting() {
        let logger = BusLogger::new(LogConfig::default()).unwrap();

        let text = logger.format_text_message(Level::Info, "event: {Startup global}");
        assert!(text.contains("[INFO] event: {Startup global}"));

        let json = logger.format_json_message(Level::Debug, "eventbus::bus", "event: {Shutdown global}").unwrap();
        assert!(json.contains(r#""level":"DEBUG""#));
        assert!(json.contains(r#""target":"eventbus::bus""#));
        assert!(json.contains(r#""message":"event: {Shutdown global}""#));
        assert!(!json.contains(r#""detail""#));
    }

    #[test]
    fn test_file_destination_filters_by_file_level() {
        let temp_file = NamedTempFile::new().unwrap();
        let logger = BusLogger::new(LogConfig {
            console_level: LevelFilter::Off,
            file_level: Some(LevelFilter::Info),
            format: LogFormat::Text,
            destination: LogDestination::File(temp_file.path().to_path_buf()),
        })
        .unwrap();

        logger.log(
            &log::Record::builder()
                .level(Level::Info)
                .args(format_args!("kept"))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .level(Level::Debug)
                .args(format_args!("filtered"))
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(written.contains("[INFO] kept"));
        assert!(!written.contains("filtered"));
    }

    // The only test in this binary that installs the global logger
    #[test]
    fn test_init_logger_installs_global_backend() {
        let temp_file = NamedTempFile::new().unwrap();
        init_logger(LogConfig {
            console_level: LevelFilter::Off,
            file_level: Some(LevelFilter::Debug),
            format: LogFormat::Json,
            destination: LogDestination::File(temp_file.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(log::max_level(), LevelFilter::Debug);
        log::debug!(target: "eventbus::bus", "event: {{Startup global}}");
        log::logger().flush();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(written.contains(r#""target":"eventbus::bus""#));
        assert!(written.contains(r#""message":"event: {Startup global}""#));
        assert!(init_logger(LogConfig::default()).is_err());
    }
}
