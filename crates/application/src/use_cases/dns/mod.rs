pub mod configure_resolver;
pub mod resolve_hostname;

pub use configure_resolver::{ConfigureResolverUseCase, ResolverSetup};
pub use resolve_hostname::ResolveHostnameUseCase;
