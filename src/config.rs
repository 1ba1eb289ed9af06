use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use toml::Value;
use log::{debug, info};
use crate::app::config::DemoConfig;

/// Configuration storage - section_name -> key -> value
pub type Configuration = HashMap<String, HashMap<String, String>>;

/// Configuration manager
pub struct ConfigManager {
    config: Configuration,
    config_file_path: Option<PathBuf>,
    selected_section: Option<String>,
}

impl ConfigManager {
    /// Create a new ConfigManager from a Configuration (primarily for testing)
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config,
            config_file_path: None,
            selected_section: None,
        }
    }

    /// Load configuration using discovery hierarchy
    pub fn load() -> Result<Self> {
        debug!("Starting configuration discovery");

        for path in discover_config_files() {
            debug!("Attempting to load config from: {}", path.display());
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        info!("No configuration file found, using defaults");
        Ok(Self::from_config(Configuration::new()))
    }

    /// Load configuration from explicit file path
    pub fn load_from_file(path: PathBuf) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = parse_toml_config(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from: {}", path.display());
        Ok(Self {
            config,
            config_file_path: Some(path),
            selected_section: None,
        })
    }

    pub fn config_file_path(&self) -> Option<&PathBuf> {
        self.config_file_path.as_ref()
    }

    /// Get value from configuration with section fallback
    pub fn get_value(&self, section: &str, key: &str) -> Option<&String> {
        // Priority: selected_section -> specified section -> base
        if let Some(selected) = &self.selected_section {
            if let Some(value) = self.config.get(selected).and_then(|s| s.get(key)) {
                return Some(value);
            }
        }

        if let Some(value) = self.config.get(section).and_then(|s| s.get(key)) {
            return Some(value);
        }

        self.config.get("base").and_then(|s| s.get(key))
    }

    /// Select configuration section for --config-name
    pub fn select_section(&mut self, section: String) {
        debug!("Selecting configuration section: {}", section);
        self.selected_section = Some(section);
    }

    /// Get log level value with type conversion
    pub fn get_log_level(&self, section: &str, key: &str) -> Result<Option<log::LevelFilter>> {
        match self.get_value(section, key) {
            Some(value) => Ok(Some(crate::logging::parse_log_level(value)?)),
            None => Ok(None),
        }
    }

    /// Get path value with type conversion
    pub fn get_path(&self, section: &str, key: &str) -> Option<PathBuf> {
        self.get_value(section, key).map(PathBuf::from)
    }

    /// Get unsigned integer value with type conversion
    pub fn get_usize(&self, section: &str, key: &str) -> Result<Option<usize>> {
        self.get_value(section, key)
            .map(|value| {
                value.parse::<usize>()
                    .with_context(|| format!("Invalid {}.{} value in config: {}", section, key, value))
            })
            .transpose()
    }

    /// Get a 64-bit unsigned value, such as a millisecond interval
    pub fn get_u64(&self, section: &str, key: &str) -> Result<Option<u64>> {
        self.get_value(section, key)
            .map(|value| {
                value.parse::<u64>()
                    .with_context(|| format!("Invalid {}.{} value in config: {}", section, key, value))
            })
            .transpose()
    }

    /// Get demo supervisor configuration from config file
    pub fn get_demo_config(&self) -> Result<DemoConfig> {
        let mut config = DemoConfig::default();

        if let Some(runners) = self.get_usize("demo", "runners")? {
            config.runners = runners;
        }
        if let Some(heartbeat_ms) = self.get_u64("demo", "heartbeat-ms")? {
            config.heartbeat_ms = heartbeat_ms;
        }
        if let Some(run_ms) = self.get_u64("demo", "run-ms")? {
            config.run_ms = run_ms;
        }
        if let Some(reloads) = self.get_usize("demo", "reloads")? {
            config.reloads = reloads;
        }

        config.validate()
            .context("Demo configuration validation failed")?;

        Ok(config)
    }
}

/// Discover configuration files in order of precedence
fn discover_config_files() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Environment variable $EVENTBUS_CONFIG
    if let Ok(env_path) = env::var("EVENTBUS_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    // 2. XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("eventbus").join("config.toml"));
    }

    // 3. Home directory
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".eventbus.toml"));
    }

    // 4. Project local
    paths.push(PathBuf::from("./.eventbus.toml"));

    debug!("Config discovery paths: {:?}", paths);
    paths
}

/// Parse TOML content to string-based configuration
fn parse_toml_config(content: &str) -> Result<Configuration> {
    let toml_value: Value = content.parse()
        .context("Failed to parse TOML content")?;

    let mut config = Configuration::new();

    if let Value::Table(table) = toml_value {
        flatten_toml_table(&table, String::new(), &mut config);
    }

    debug!("Parsed configuration: {:?}", config);
    Ok(config)
}

/// Recursively flatten TOML tables into section.subsection format
fn flatten_toml_table(table: &toml::Table, prefix: String, config: &mut Configuration) {
    for (key, value) in table {
        let section_name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Table(subtable) if subtable.values().all(|v| !v.is_table()) => {
                config
                    .entry(section_name)
                    .or_default()
                    .extend(subtable.iter().map(|(subkey, subvalue)| (subkey.clone(), toml_value_to_string(subvalue))));
            }
            Value::Table(subtable) => flatten_toml_table(subtable, section_name, config),
            // top-level scalars belong to [base]
            _ if prefix.is_empty() => {
                config
                    .entry("base".to_string())
                    .or_default()
                    .insert(key.clone(), toml_value_to_string(value));
            }
            _ => {}
        }
    }
}

/// Convert TOML Value to string representation
fn toml_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}
