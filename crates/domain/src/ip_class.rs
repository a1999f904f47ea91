use std::fmt;
use std::net::IpAddr;

/// Syntactic class of a string that might hold an IP address literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpClass {
    V4,
    V6,
    NotIp,
}

impl IpClass {
    /// Strict literal parse: no trimming, no DNS, no partial matches.
    pub fn classify(s: &str) -> Self {
        match s.parse::<IpAddr>() {
            Ok(IpAddr::V4(_)) => Self::V4,
            Ok(IpAddr::V6(_)) => Self::V6,
            Err(_) => Self::NotIp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
            Self::NotIp => "NotIP",
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
