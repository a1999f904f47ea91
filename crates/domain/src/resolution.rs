use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const UNRESOLVED: &str = "Unable to Resolve";
pub const UNRESOLVED_IPV6: &str = "Unable to Resolve IPv6";

/// Outcome of a reverse lookup for one cell.
///
/// The unresolved variants keep their reason for logging, but
/// [`Resolution::display_value`] collapses `NotIpv4` and `LookupFailed`
/// into the same output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    NotIpv4,
    Ipv6Unsupported,
    LookupFailed,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn display_value(&self) -> &str {
        match self {
            Self::Resolved(hostname) => hostname.as_str(),
            Self::Ipv6Unsupported => UNRESOLVED_IPV6,
            Self::NotIpv4 | Self::LookupFailed => UNRESOLVED,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::Resolved(_) => "resolved",
            Self::NotIpv4 => "not an IPv4 address",
            Self::Ipv6Unsupported => "IPv6 lookups are not attempted",
            Self::LookupFailed => "lookup failed",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameserverSource {
    /// Override taken from `dns_lookup.server`
    Custom,
    /// Whatever the host is configured with
    System,
}

/// Nameservers every PTR query of the run goes to, fixed before the
/// pipeline starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveResolver {
    nameservers: Vec<SocketAddr>,
    source: NameserverSource,
}

impl ActiveResolver {
    pub const DNS_PORT: u16 = 53;

    pub fn custom(address: Ipv4Addr) -> Self {
        Self {
            nameservers: vec![SocketAddr::from((address, Self::DNS_PORT))],
            source: NameserverSource::Custom,
        }
    }

    /// With no nameservers configured the local host is asked, as libc does.
    pub fn system(mut nameservers: Vec<SocketAddr>) -> Self {
        if nameservers.is_empty() {
            nameservers.push(SocketAddr::from((Ipv4Addr::LOCALHOST, Self::DNS_PORT)));
        }
        Self {
            nameservers,
            source: NameserverSource::System,
        }
    }

    /// Nameserver that receives every query.
    pub fn primary(&self) -> SocketAddr {
        self.nameservers[0]
    }

    pub fn nameservers(&self) -> &[SocketAddr] {
        &self.nameservers
    }

    pub fn source(&self) -> NameserverSource {
        self.source
    }

    pub fn is_custom(&self) -> bool {
        self.source == NameserverSource::Custom
    }
}

impl fmt::Display for ActiveResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let servers: Vec<String> = self.nameservers.iter().map(|s| s.to_string()).collect();
        match self.source {
            NameserverSource::Custom => write!(f, "custom {}", servers.join(", ")),
            NameserverSource::System => write!(f, "system default {}", servers.join(", ")),
        }
    }
}

/// Non-fatal problem with the nameserver override; the system default
/// stays in effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverWarning {
    #[error("custom DNS server address '{0}' is invalid or not IPv4")]
    InvalidAddress(String),

    #[error("failed to install custom DNS server {address}: {reason}")]
    InstallFailed { address: String, reason: String },
}
