mod dataset_io;
mod hostname_resolver;
mod resolver_installer;

pub use dataset_io::{DatasetReader, DatasetWriter};
pub use hostname_resolver::HostnameResolver;
pub use resolver_installer::ResolverInstaller;
