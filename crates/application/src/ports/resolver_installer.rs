use pacrunch_domain::{ActiveResolver, ResolverWarning};
use std::net::Ipv4Addr;

/// Decides which nameservers the run's PTR queries go to.
pub trait ResolverInstaller: Send + Sync {
    /// Nameservers the host is configured with.
    fn system_default(&self) -> ActiveResolver;

    /// Make `address` the only nameserver, or explain why it cannot be.
    fn install(&self, address: Ipv4Addr) -> Result<ActiveResolver, ResolverWarning>;
}
