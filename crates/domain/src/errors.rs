use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Network error talking to {server}: {reason}")]
    Network { server: String, reason: String },

    #[error("No nameserver found: {0}")]
    NoNameserverFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("DNS message codec error: {0}")]
    Codec(String),
}

impl DomainError {
    pub fn network(server: impl ToString, reason: impl ToString) -> Self {
        Self::Network {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
