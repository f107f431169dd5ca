pub mod exchange;
pub mod server;
pub mod transport;

pub use exchange::{MessageCodec, UdpDnsExchange};
pub use server::DnsServerHandler;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
