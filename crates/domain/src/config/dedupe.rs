use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Row deduplication on a single key column.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DedupeConfig {
    pub enabled: bool,

    #[serde(default)]
    pub column: String,
}

impl DedupeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.column.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dedupe.column must name a column when dedupe is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
