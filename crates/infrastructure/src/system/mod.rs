pub mod resolver_installer;

pub use resolver_installer::SystemResolverInstaller;
