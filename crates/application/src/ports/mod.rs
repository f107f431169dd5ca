mod dns_exchange;
mod root_server_selector;

pub use dns_exchange::DnsExchange;
pub use root_server_selector::RootServerSelector;
