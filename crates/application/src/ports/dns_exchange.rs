use async_trait::async_trait;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use via6_dns_domain::DomainError;

#[async_trait]
pub trait DnsExchange: Send + Sync {
    /// Send one request to `server` and wait for its reply.
    ///
    /// Timeouts, socket failures and undecodable replies all surface as
    /// [`DomainError::Network`]. No retry is attempted.
    async fn exchange(&self, server: SocketAddr, request: &Message)
        -> Result<Message, DomainError>;
}
