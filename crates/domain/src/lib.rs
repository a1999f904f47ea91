//! pacrunch Domain Layer
pub mod config;
pub mod dataset;
pub mod errors;
pub mod ip_class;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError};
pub use dataset::{Dataset, Row};
pub use errors::DomainError;
pub use ip_class::IpClass;
pub use resolution::{ActiveResolver, NameserverSource, Resolution, ResolverWarning};
