//! 4-via-6 address encoding.
//!
//! An IPv4 destination is carried inside the low 32 bits of an IPv6 address
//! under a fixed 96-bit prefix, so IPv6-only clients can route to it.

use crate::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Textual form of the fixed 96-bit prefix. The dotted-quad IPv4 text is
/// appended directly to it.
pub const VIA6_PREFIX: &str = "fd7a:115c:a1e0:b1a:0:fe:";

/// TTL of every synthesized AAAA record, in seconds.
pub const SYNTHESIZED_TTL: u32 = 120;

pub fn via6_literal(ipv4: Ipv4Addr) -> String {
    format!("{}{}", VIA6_PREFIX, ipv4)
}

pub fn embed_ipv4(ipv4: Ipv4Addr) -> Result<Ipv6Addr, DomainError> {
    let literal = via6_literal(ipv4);
    literal
        .parse::<Ipv6Addr>()
        .map_err(|e| DomainError::InvalidIpAddress(format!("{}: {}", literal, e)))
}
