use crate::ports::RootServerSelector;
use std::net::Ipv4Addr;

/// Draws a root nameserver uniformly at random on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRootSelector;

impl RandomRootSelector {
    pub fn new() -> Self {
        Self
    }
}

impl RootServerSelector for RandomRootSelector {
    fn select(&self, roots: &[Ipv4Addr]) -> Option<Ipv4Addr> {
        if roots.is_empty() {
            return None;
        }
        Some(roots[fastrand::usize(..roots.len())])
    }
}
