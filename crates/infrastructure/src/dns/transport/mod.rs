pub mod udp;

use async_trait::async_trait;
use pacrunch_domain::DomainError;
use std::time::Duration;

pub use udp::UdpTransport;

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Send one query and return the raw reply bytes.
    async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError>;

    fn server(&self) -> String;
}
