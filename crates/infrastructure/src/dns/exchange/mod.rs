pub mod message_codec;
pub mod udp_exchange;

pub use message_codec::MessageCodec;
pub use udp_exchange::UdpDnsExchange;
