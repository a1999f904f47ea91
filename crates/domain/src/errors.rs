use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Column '{column}' required by the {stage} stage is not present in the dataset")]
    MissingColumn { stage: &'static str, column: String },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} has {found} fields but the header has {expected}")]
    RowTooLong {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Failed to read dataset {0}: {1}")]
    DatasetRead(String, String),

    #[error("Failed to write dataset {0}: {1}")]
    DatasetWrite(String, String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },
}
