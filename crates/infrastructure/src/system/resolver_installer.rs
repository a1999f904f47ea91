use pacrunch_application::ports::ResolverInstaller;
use pacrunch_domain::{ActiveResolver, ResolverWarning};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RESOLV_CONF: &str = "/etc/resolv.conf";

/// Reads the host's nameservers from resolv.conf and vets override
/// addresses before they are used.
pub struct SystemResolverInstaller {
    resolv_conf: PathBuf,
}

impl SystemResolverInstaller {
    pub fn new() -> Self {
        Self::with_resolv_conf(RESOLV_CONF)
    }

    pub fn with_resolv_conf(path: impl AsRef<Path>) -> Self {
        Self {
            resolv_conf: path.as_ref().to_path_buf(),
        }
    }

    /// `nameserver` lines in file order. Scoped IPv6 entries (`fe80::1%eth0`)
    /// are skipped since a socket address cannot carry the interface name.
    pub fn parse_nameservers(contents: &str) -> Vec<SocketAddr> {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next()) {
                    (Some("nameserver"), Some(address)) => address.parse::<IpAddr>().ok(),
                    _ => None,
                }
            })
            .map(|ip| SocketAddr::new(ip, ActiveResolver::DNS_PORT))
            .collect()
    }
}

impl Default for SystemResolverInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverInstaller for SystemResolverInstaller {
    fn system_default(&self) -> ActiveResolver {
        let nameservers = match std::fs::read_to_string(&self.resolv_conf) {
            Ok(contents) => Self::parse_nameservers(&contents),
            Err(e) => {
                warn!(
                    path = %self.resolv_conf.display(),
                    error = %e,
                    "Could not read system resolver configuration"
                );
                Vec::new()
            }
        };

        debug!(count = nameservers.len(), "System nameservers loaded");
        ActiveResolver::system(nameservers)
    }

    fn install(&self, address: Ipv4Addr) -> Result<ActiveResolver, ResolverWarning> {
        let reason = if address.is_unspecified() {
            Some("unspecified address")
        } else if address.is_broadcast() {
            Some("broadcast address")
        } else if address.is_multicast() {
            Some("multicast address")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ResolverWarning::InstallFailed {
                address: address.to_string(),
                reason: format!("{} cannot be used as a nameserver", reason),
            }),
            None => Ok(ActiveResolver::custom(address)),
        }
    }
}
