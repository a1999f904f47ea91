use async_trait::async_trait;
use pacrunch_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait HostnameResolver: Send + Sync {
    /// Issue one PTR query for `ip`. `Ok(None)` means the server answered
    /// without a PTR record.
    async fn resolve_hostname(&self, ip: Ipv4Addr) -> Result<Option<String>, DomainError>;
}
