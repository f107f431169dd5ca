//! Via6 DNS Domain Layer
pub mod config;
pub mod errors;
pub mod root_hints;
pub mod via6;

pub use config::{CliOverrides, Config, ConfigError, LookupMode};
pub use errors::DomainError;
pub use root_hints::ROOT_NAMESERVERS;
pub use via6::{embed_ipv4, via6_literal, SYNTHESIZED_TTL, VIA6_PREFIX};
