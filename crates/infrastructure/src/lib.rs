//! Via6 DNS Infrastructure Layer
pub mod dns;
