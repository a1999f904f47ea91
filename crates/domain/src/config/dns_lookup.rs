use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Reverse-DNS enrichment of an IP address column.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsLookupConfig {
    pub enabled: bool,

    #[serde(default)]
    pub column_from: String,

    #[serde(default)]
    pub column_to: String,

    #[serde(default)]
    pub server: DnsServerConfig,

    /// Per-query timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Memoise lookups for repeated values within one run. Off by default:
    /// every row issues its own query.
    #[serde(default)]
    pub cache_results: bool,
}

/// Optional nameserver override.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsServerConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub address: String,
}

impl Default for DnsLookupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            column_from: String::new(),
            column_to: String::new(),
            server: DnsServerConfig::default(),
            timeout_ms: default_timeout_ms(),
            cache_results: false,
        }
    }
}

impl DnsLookupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }

        if self.column_from.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dns_lookup.column_from must name a column when DNS lookup is enabled".to_string(),
            ));
        }

        if self.column_to.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dns_lookup.column_to must name a column when DNS lookup is enabled".to_string(),
            ));
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns_lookup.timeout_ms cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_timeout_ms() -> u64 {
    2000
}
