use super::MessageCodec;
use crate::dns::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use via6_dns_application::ports::DnsExchange;
use via6_dns_domain::DomainError;

/// One request, one datagram, one reply. Used for every delegation hop and
/// for the upstream forwarder.
pub struct UdpDnsExchange {
    timeout: Duration,
}

impl UdpDnsExchange {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_millis(timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(timeout_ms))
    }
}

#[async_trait]
impl DnsExchange for UdpDnsExchange {
    async fn exchange(
        &self,
        server: SocketAddr,
        request: &Message,
    ) -> Result<Message, DomainError> {
        let bytes = MessageCodec::encode(request).map_err(|e| DomainError::network(server, e))?;

        let response = UdpTransport::new(server).send(&bytes, self.timeout).await?;

        MessageCodec::decode(&response.bytes).map_err(|e| DomainError::network(server, e))
    }
}
