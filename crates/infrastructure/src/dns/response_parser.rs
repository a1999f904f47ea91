use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use pacrunch_domain::DomainError;
use tracing::debug;

/// The parts of a PTR response the resolver cares about.
#[derive(Debug, Clone)]
pub struct PtrResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    /// TC bit; the answer section may be incomplete
    pub truncated: bool,

    /// PTR targets in answer order
    pub hostnames: Vec<String>,
}

impl PtrResponse {
    pub fn first_hostname(&self) -> Option<&str> {
        self.hostnames.first().map(String::as_str)
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<PtrResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let id = message.id();
        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut hostnames = Vec::new();
        for record in message.answers() {
            if let RData::PTR(ptr) = record.data() {
                hostnames.push(ptr.to_utf8());
            }
        }

        debug!(
            rcode = Self::rcode_to_status(rcode),
            answers = hostnames.len(),
            truncated = truncated,
            "PTR response parsed"
        );

        Ok(PtrResponse {
            id,
            rcode,
            truncated,
            hostnames,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
