use crate::ports::DnsExchange;
use hickory_proto::op::{Message, Query};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;
use via6_dns_domain::DomainError;

/// Passes a single question through to the fixed upstream resolver.
pub struct ForwardQueryUseCase {
    exchange: Arc<dyn DnsExchange>,
    upstream: SocketAddr,
}

impl ForwardQueryUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>, upstream: SocketAddr) -> Self {
        Self { exchange, upstream }
    }

    pub fn upstream(&self) -> SocketAddr {
        self.upstream
    }

    /// Copy `request`, narrow its question list to `question`, and return
    /// the upstream reply untouched.
    pub async fn forward(&self, question: &Query, request: &Message) -> Result<Message, DomainError> {
        let mut outbound = request.clone();
        outbound.take_queries();
        outbound.add_query(question.clone());

        debug!(
            upstream = %self.upstream,
            name = %question.name(),
            record_type = ?question.query_type(),
            "Forwarding query upstream"
        );

        self.exchange.exchange(self.upstream, &outbound).await
    }
}
