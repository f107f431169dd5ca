use crate::root_hints::ROOT_NAMESERVERS;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Where the A records behind a synthesized AAAA answer come from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Walk the delegation chain from a root nameserver.
    #[default]
    Recursive,

    /// Ask the fixed upstream resolver for the A records.
    Upstream,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Upstream => "upstream",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<Ipv4Addr>,

    /// Timeout of a single UDP exchange, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Upper bound on the UDP exchanges one top-level resolution may make,
    /// CNAME hops and nameserver sub-resolutions included.
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    #[serde(default = "default_nameserver_port")]
    pub nameserver_port: u16,

    #[serde(default)]
    pub lookup_mode: LookupMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            query_timeout_ms: default_query_timeout_ms(),
            max_hops: default_max_hops(),
            nameserver_port: default_nameserver_port(),
            lookup_mode: LookupMode::default(),
        }
    }
}

fn default_root_servers() -> Vec<Ipv4Addr> {
    ROOT_NAMESERVERS.to_vec()
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_max_hops() -> usize {
    64
}

fn default_nameserver_port() -> u16 {
    53
}
