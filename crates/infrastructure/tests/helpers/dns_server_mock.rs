#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum MockReply {
    /// NOERROR with one PTR answer pointing at this name
    Ptr(&'static str),
    NxDomain,
    ServFail,
    /// Valid answer carrying the wrong transaction ID
    WrongId(&'static str),
    /// TC bit set and no answers
    Truncated,
    /// A forged answer from another socket first, then the real one
    SpoofedThen {
        forged: &'static str,
        real: &'static str,
    },
    /// Bytes that do not parse as a DNS message
    Garbage,
    /// Never answer
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let spoofer = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::Relaxed);
                            if let MockReply::SpoofedThen { forged, .. } = &reply {
                                let forged = MockReply::Ptr(*forged);
                                if let Some(response) = Self::build_response(&buf[..len], &forged) {
                                    let _ = spoofer.send_to(&response, peer).await;
                                }
                            }
                            if let Some(response) = Self::build_response(&buf[..len], &reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    fn build_response(query: &[u8], reply: &MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let question_end = Self::question_end(query)?;

        let mut flags = 0x81;

        let (rcode, answer, flip_id) = match reply {
            MockReply::Ptr(name) => (0x00, Some(*name), false),
            MockReply::SpoofedThen { real, .. } => (0x00, Some(*real), false),
            MockReply::Truncated => {
                flags |= 0x02;
                (0x00, None, false)
            }
            MockReply::NxDomain => (0x03, None, false),
            MockReply::ServFail => (0x02, None, false),
            MockReply::WrongId(name) => (0x00, Some(*name), true),
            MockReply::Garbage => return Some(vec![0xde, 0xad, 0xbe, 0xef]),
            MockReply::Silent => return None,
        };

        let mut response = Vec::with_capacity(512);

        let id = u16::from_be_bytes([query[0], query[1]]);
        let id = if flip_id { id.wrapping_add(1) } else { id };
        response.extend_from_slice(&id.to_be_bytes());

        response.push(flags);
        response.push(0x80 | rcode);

        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, if answer.is_some() { 0x01 } else { 0x00 }]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..question_end]);

        if let Some(name) = answer {
            let rdata = Self::encode_name(name);
            response.extend_from_slice(&[
                0xc0, 0x0c,
                0x00, 0x0c,
                0x00, 0x01,
                0x00, 0x00, 0x0e, 0x10,
            ]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        Some(response)
    }

    fn question_end(query: &[u8]) -> Option<usize> {
        let mut pos = 12;
        loop {
            let len = *query.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            pos += len;
        }
        let end = pos + 4;
        (end <= query.len()).then_some(end)
    }

    fn encode_name(name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for label in name.trim_end_matches('.').split('.') {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        out
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
