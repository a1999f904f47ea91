use serde::{Deserialize, Serialize};

use super::dedupe::DedupeConfig;
use super::dns_lookup::DnsLookupConfig;
use super::drop::DropConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["pacrunch.toml", "/etc/pacrunch/config.toml"];

/// Main configuration structure for pacrunch
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// CSV file to read
    pub input: String,

    /// CSV file to write
    pub output: String,

    /// Forces debug-level logging
    #[serde(default)]
    pub debug: bool,

    /// Row deduplication
    pub dedupe: DedupeConfig,

    /// Column removal
    pub drop: DropConfig,

    /// Reverse-DNS enrichment
    pub dns_lookup: DnsLookupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pacrunch.toml in current directory
    /// 3. /etc/pacrunch/config.toml
    ///
    /// No file found is an error; there is no built-in default.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => return Err(ConfigError::NotFound(DEFAULT_CONFIG_PATHS.join(", "))),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::parse(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.debug {
            self.debug = true;
        }
    }

    /// Validate configuration
    ///
    /// Only stages that are enabled need their columns named.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.trim().is_empty() {
            return Err(ConfigError::Validation("input path cannot be empty".to_string()));
        }

        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output path cannot be empty".to_string()));
        }

        self.dedupe.validate()?;
        self.dns_lookup.validate()?;

        Ok(())
    }

    /// Level handed to the log filter; `debug = true` wins over `logging.level`.
    pub fn log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.logging.level
        }
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(|path| path.to_string())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub output: Option<String>,
    pub log_level: Option<String>,
    pub debug: bool,
}
