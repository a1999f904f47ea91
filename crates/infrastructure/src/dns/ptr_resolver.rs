use super::message_builder::MessageBuilder;
use super::response_parser::{PtrResponse, ResponseParser};
use super::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use pacrunch_application::ports::HostnameResolver;
use pacrunch_domain::{ActiveResolver, DomainError};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Reverse lookups against the resolver chosen at startup. One query per
/// lookup, sent to the primary nameserver.
pub struct PtrHostnameResolver {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl PtrHostnameResolver {
    pub fn new(active: &ActiveResolver, timeout_ms: u64) -> Self {
        Self::with_transport(
            Arc::new(UdpTransport::new(active.primary())),
            Duration::from_millis(timeout_ms),
        )
    }

    pub fn with_transport(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    fn check_response(&self, id: u16, response: &PtrResponse) -> Result<(), DomainError> {
        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {}",
                response.id, id
            )));
        }

        if response.is_server_error() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} from {}",
                ResponseParser::rcode_to_status(response.rcode),
                self.transport.server()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl HostnameResolver for PtrHostnameResolver {
    async fn resolve_hostname(&self, ip: Ipv4Addr) -> Result<Option<String>, DomainError> {
        let (id, query) = MessageBuilder::build_ptr_query(ip)?;

        debug!(
            ip = %ip,
            reverse_domain = %MessageBuilder::reverse_domain(ip),
            server = %self.transport.server(),
            "Performing PTR lookup"
        );

        let reply = self.transport.send(&query, self.timeout).await?;
        let response = ResponseParser::parse(&reply)?;
        self.check_response(id, &response)?;

        if response.truncated && response.hostnames.is_empty() {
            warn!(
                ip = %ip,
                server = %self.transport.server(),
                "PTR response truncated with no answers"
            );
            return Err(DomainError::InvalidDnsResponse(
                "response truncated (TC set) with no answers; TCP retry is not attempted"
                    .to_string(),
            ));
        }

        if response.is_nxdomain() {
            debug!(ip = %ip, "PTR lookup returned NXDOMAIN");
        }

        Ok(response.first_hostname().map(str::to_string))
    }
}
