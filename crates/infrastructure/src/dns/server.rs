use crate::dns::exchange::MessageCodec;
use hickory_proto::op::{MessageType, OpCode};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use via6_dns_application::use_cases::HandleDnsQueryUseCase;

/// Bridges raw datagrams from the listener to the query dispatcher.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the encoded reply, or `None` when the datagram gets no answer:
    /// it did not decode, it is not a query, or its opcode is not QUERY.
    pub async fn handle_raw_udp(&self, query_buf: &[u8], client_ip: IpAddr) -> Option<Vec<u8>> {
        let request = match MessageCodec::decode(query_buf) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client_ip, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        if request.message_type() != MessageType::Query || request.op_code() != OpCode::Query {
            debug!(
                client = %client_ip,
                message_type = ?request.message_type(),
                op_code = ?request.op_code(),
                "Ignoring non-QUERY message"
            );
            return None;
        }

        if let Some(question) = request.queries().first() {
            info!(
                domain = %question.name(),
                record_type = ?question.query_type(),
                client = %client_ip,
                "DNS query received"
            );
        }

        let reply = self.use_case.handle(&request).await;

        match MessageCodec::encode(&reply) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(id = reply.id(), error = %e, "Failed to encode reply");
                None
            }
        }
    }
}
