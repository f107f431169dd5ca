//! Wire-format encoding and decoding of whole DNS messages via `hickory-proto`.

use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tracing::debug;
use via6_dns_domain::DomainError;

pub struct MessageCodec;

impl MessageCodec {
    pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::Codec(format!("failed to serialize DNS message: {}", e)))?;

        Ok(buf)
    }

    pub fn decode(bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(bytes)
            .map_err(|e| DomainError::Codec(format!("failed to parse DNS message: {}", e)))?;

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            truncated = message.truncated(),
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            additional = message.additionals().len(),
            "DNS message decoded"
        );

        Ok(message)
    }
}
