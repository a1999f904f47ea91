use crate::ports::HostnameResolver;
use pacrunch_domain::{IpClass, Resolution};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

/// Turns one cell into a [`Resolution`]. Only IPv4 literals reach the
/// network; everything else short-circuits to a sentinel.
pub struct ResolveHostnameUseCase {
    hostname_resolver: Arc<dyn HostnameResolver>,
}

impl ResolveHostnameUseCase {
    pub fn new(hostname_resolver: Arc<dyn HostnameResolver>) -> Self {
        Self { hostname_resolver }
    }

    pub async fn execute(&self, host: &str) -> Resolution {
        let resolution = match IpClass::classify(host) {
            IpClass::V4 => match host.parse::<Ipv4Addr>() {
                Ok(ip) => self.lookup(ip).await,
                Err(_) => Resolution::NotIpv4,
            },
            IpClass::V6 => Resolution::Ipv6Unsupported,
            IpClass::NotIp => Resolution::NotIpv4,
        };

        if !resolution.is_resolved() {
            debug!(host = %host, reason = resolution.reason(), "Hostname not resolved");
        }

        resolution
    }

    async fn lookup(&self, ip: Ipv4Addr) -> Resolution {
        match self.hostname_resolver.resolve_hostname(ip).await {
            Ok(Some(hostname)) => {
                debug!(ip = %ip, hostname = %hostname, "Hostname resolved");
                Resolution::Resolved(hostname)
            }
            Ok(None) => {
                debug!(ip = %ip, "No PTR record found");
                Resolution::LookupFailed
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "PTR lookup failed");
                Resolution::LookupFailed
            }
        }
    }
}
