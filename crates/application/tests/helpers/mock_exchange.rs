use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::rr::RecordType;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use via6_dns_application::ports::{DnsExchange, RootServerSelector};
use via6_dns_domain::DomainError;

type ScriptKey = (IpAddr, String, RecordType);

/// Scripted nameservers: each (server, name, type) maps to one canned reply.
pub struct MockDnsExchange {
    responses: Mutex<HashMap<ScriptKey, Result<Message, DomainError>>>,
    calls: Mutex<Vec<(SocketAddr, Message)>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, server: &str, name: &str, record_type: RecordType, response: Message) {
        self.responses
            .lock()
            .unwrap()
            .insert(key(server, name, record_type), Ok(response));
    }

    pub fn fail(&self, server: &str, name: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(key(server, name, record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<(SocketAddr, Message)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queried_servers(&self) -> Vec<IpAddr> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(server, _)| server.ip())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockDnsExchange {
    fn default() -> Self {
        Self::new()
    }
}

fn key(server: &str, name: &str, record_type: RecordType) -> ScriptKey {
    (server.parse().unwrap(), normalize(name), record_type)
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_lowercase()
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        server: SocketAddr,
        request: &Message,
    ) -> Result<Message, DomainError> {
        self.calls.lock().unwrap().push((server, request.clone()));

        let question = request
            .queries()
            .first()
            .ok_or_else(|| DomainError::network(server, "request without question"))?;

        let lookup = (
            server.ip(),
            normalize(&question.name().to_utf8()),
            question.query_type(),
        );

        self.responses
            .lock()
            .unwrap()
            .get(&lookup)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::network(
                    server,
                    format!("no mock response for {} {:?}", lookup.1, lookup.2),
                ))
            })
    }
}

/// Walks the root list in order, one entry per selection, and counts calls.
pub struct SequenceRootSelector {
    selections: AtomicUsize,
}

impl SequenceRootSelector {
    pub fn new() -> Self {
        Self {
            selections: AtomicUsize::new(0),
        }
    }

    pub fn selections(&self) -> usize {
        self.selections.load(Ordering::SeqCst)
    }
}

impl Default for SequenceRootSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RootServerSelector for SequenceRootSelector {
    fn select(&self, roots: &[Ipv4Addr]) -> Option<Ipv4Addr> {
        if roots.is_empty() {
            return None;
        }
        let n = self.selections.fetch_add(1, Ordering::SeqCst);
        Some(roots[n % roots.len()])
    }
}
