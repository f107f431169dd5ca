use std::net::Ipv4Addr;

pub trait RootServerSelector: Send + Sync {
    /// Pick the nameserver a resolution starts from. `None` only when
    /// `roots` is empty.
    fn select(&self, roots: &[Ipv4Addr]) -> Option<Ipv4Addr>;
}
