use crate::ports::ResolverInstaller;
use pacrunch_domain::config::DnsServerConfig;
use pacrunch_domain::{ActiveResolver, IpClass, ResolverWarning};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{info, warn};

/// Resolver in effect for the run, and why the override was not used if
/// it was requested but rejected.
#[derive(Debug, Clone)]
pub struct ResolverSetup {
    pub active: ActiveResolver,
    pub warning: Option<ResolverWarning>,
}

pub struct ConfigureResolverUseCase {
    installer: Arc<dyn ResolverInstaller>,
}

impl ConfigureResolverUseCase {
    pub fn new(installer: Arc<dyn ResolverInstaller>) -> Self {
        Self { installer }
    }

    /// Install `address` as the only nameserver. It must be an IPv4
    /// literal; on any failure the caller keeps the system default.
    pub fn configure(&self, address: &str) -> Result<ActiveResolver, ResolverWarning> {
        if IpClass::classify(address) != IpClass::V4 {
            return Err(ResolverWarning::InvalidAddress(address.to_string()));
        }

        let ip: Ipv4Addr = address
            .parse()
            .map_err(|_| ResolverWarning::InvalidAddress(address.to_string()))?;

        self.installer.install(ip)
    }

    pub fn execute(&self, server: &DnsServerConfig) -> ResolverSetup {
        if !server.enabled {
            let active = self.installer.system_default();
            info!(resolver = %active, "Custom DNS resolver disabled, using the host default");
            return ResolverSetup {
                active,
                warning: None,
            };
        }

        match self.configure(&server.address) {
            Ok(active) => {
                info!(resolver = %active, "DNS resolver set");
                ResolverSetup {
                    active,
                    warning: None,
                }
            }
            Err(warning) => {
                let active = self.installer.system_default();
                warn!(
                    warning = %warning,
                    resolver = %active,
                    "Falling back to the host default DNS resolver"
                );
                ResolverSetup {
                    active,
                    warning: Some(warning),
                }
            }
        }
    }
}
