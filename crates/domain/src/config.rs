pub mod dedupe;
pub mod dns_lookup;
pub mod drop;
pub mod errors;
pub mod logging;
pub mod root;

pub use dedupe::DedupeConfig;
pub use dns_lookup::{DnsLookupConfig, DnsServerConfig};
pub use drop::DropConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
