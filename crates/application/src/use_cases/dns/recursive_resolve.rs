use crate::ports::{DnsExchange, RootServerSelector};
use futures::future::{BoxFuture, FutureExt};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;
use via6_dns_domain::DomainError;

const DEFAULT_MAX_HOPS: usize = 64;
const DEFAULT_NAMESERVER_PORT: u16 = 53;

/// Iterative A-record resolution from a root nameserver down to an
/// authoritative answer.
///
/// Every top-level call, and every CNAME hop, starts over at a root drawn
/// from the selector. Nameserver names found in the authority section are
/// resolved with the same walk.
pub struct RecursiveResolveUseCase {
    exchange: Arc<dyn DnsExchange>,
    selector: Arc<dyn RootServerSelector>,
    root_servers: Arc<[Ipv4Addr]>,
    max_hops: usize,
    nameserver_port: u16,
}

/// Exchanges left to one top-level resolution, shared with every walk it spawns.
struct HopBudget {
    used: AtomicUsize,
    limit: usize,
}

impl HopBudget {
    fn new(limit: usize) -> Self {
        Self {
            used: AtomicUsize::new(0),
            limit,
        }
    }

    fn try_consume(&self) -> bool {
        self.used.fetch_add(1, Ordering::Relaxed) < self.limit
    }
}

impl RecursiveResolveUseCase {
    pub fn new(
        exchange: Arc<dyn DnsExchange>,
        selector: Arc<dyn RootServerSelector>,
        root_servers: Vec<Ipv4Addr>,
    ) -> Self {
        Self {
            exchange,
            selector,
            root_servers: Arc::from(root_servers),
            max_hops: DEFAULT_MAX_HOPS,
            nameserver_port: DEFAULT_NAMESERVER_PORT,
        }
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn with_nameserver_port(mut self, port: u16) -> Self {
        self.nameserver_port = port;
        self
    }

    /// Resolve `name` to the answer section of the authoritative reply.
    pub async fn resolve(&self, name: &Name) -> Result<Vec<Record>, DomainError> {
        let mut fqdn = name.clone();
        fqdn.set_fqdn(true);

        let budget = HopBudget::new(self.max_hops);
        self.walk(fqdn, &budget).await
    }

    fn walk<'a>(
        &'a self,
        name: Name,
        budget: &'a HopBudget,
    ) -> BoxFuture<'a, Result<Vec<Record>, DomainError>> {
        async move {
            let mut nameserver = self.select_root(&name)?;

            loop {
                if !budget.try_consume() {
                    return Err(DomainError::NoNameserverFound(format!(
                        "hop limit of {} exceeded while resolving {}",
                        budget.limit, name
                    )));
                }

                let request = Self::build_query(&name);
                let server = SocketAddr::new(IpAddr::V4(nameserver), self.nameserver_port);
                let response = self.exchange.exchange(server, &request).await?;

                debug!(
                    name = %name,
                    nameserver = %nameserver,
                    answers = response.answers().len(),
                    authority = response.name_servers().len(),
                    additional = response.additionals().len(),
                    "Delegation step"
                );

                if let Some(first) = response.answers().first() {
                    if let RData::CNAME(cname) = first.data() {
                        let target = cname.0.clone();
                        debug!(name = %name, target = %target, "Following CNAME from a fresh root");
                        return self.walk(target, budget).await;
                    }
                    return Ok(response.answers().to_vec());
                }

                nameserver = self.next_nameserver(&name, &response, budget).await?;
            }
        }
        .boxed()
    }

    async fn next_nameserver(
        &self,
        name: &Name,
        response: &Message,
        budget: &HopBudget,
    ) -> Result<Ipv4Addr, DomainError> {
        if response.additionals().is_empty() && !response.name_servers().is_empty() {
            let target = match response.name_servers()[0].data() {
                RData::NS(ns) => ns.0.clone(),
                RData::SOA(soa) => soa.mname().clone(),
                _ => {
                    return Err(DomainError::NoNameserverFound(format!(
                        "authority section for {} holds neither NS nor SOA",
                        name
                    )))
                }
            };

            let records = self.walk(target.clone(), budget).await.map_err(|e| {
                DomainError::NoNameserverFound(format!(
                    "could not resolve nameserver {} for {}: {}",
                    target, name, e
                ))
            })?;

            return first_ipv4(&records).ok_or_else(|| {
                DomainError::NoNameserverFound(format!(
                    "nameserver {} for {} has no A record",
                    target, name
                ))
            });
        }

        first_ipv4(response.additionals()).ok_or_else(|| {
            DomainError::NoNameserverFound(format!("no glue A record for {}", name))
        })
    }

    fn select_root(&self, name: &Name) -> Result<Ipv4Addr, DomainError> {
        self.selector.select(&self.root_servers).ok_or_else(|| {
            DomainError::NoNameserverFound(format!(
                "no root nameserver configured to resolve {}",
                name
            ))
        })
    }

    fn build_query(name: &Name) -> Message {
        let mut query = Query::new();
        query.set_name(name.clone());
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);
        message
    }
}

fn first_ipv4(records: &[Record]) -> Option<Ipv4Addr> {
    records.iter().find_map(|record| match record.data() {
        RData::A(a) => Some(a.0),
        _ => None,
    })
}
