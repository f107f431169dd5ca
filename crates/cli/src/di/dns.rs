use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use via6_dns_application::services::RandomRootSelector;
use via6_dns_application::use_cases::{
    ForwardQueryUseCase, HandleDnsQueryUseCase, RecursiveResolveUseCase,
};
use via6_dns_domain::Config;
use via6_dns_infrastructure::dns::{DnsServerHandler, UdpDnsExchange};

pub struct DnsServices {
    pub resolver: Arc<RecursiveResolveUseCase>,
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let exchange = Arc::new(UdpDnsExchange::new(Duration::from_millis(
            config.resolver.query_timeout_ms,
        )));

        let resolver = Arc::new(
            RecursiveResolveUseCase::new(
                exchange.clone(),
                Arc::new(RandomRootSelector::new()),
                config.resolver.root_servers.clone(),
            )
            .with_max_hops(config.resolver.max_hops)
            .with_nameserver_port(config.resolver.nameserver_port),
        );

        let forwarder = Arc::new(ForwardQueryUseCase::new(exchange, config.upstream.address));

        let handler_use_case = Arc::new(
            HandleDnsQueryUseCase::new(resolver.clone(), forwarder)
                .with_lookup_mode(config.resolver.lookup_mode),
        );

        info!(
            roots = config.resolver.root_servers.len(),
            max_hops = config.resolver.max_hops,
            timeout_ms = config.resolver.query_timeout_ms,
            "DNS services initialized"
        );

        Self {
            resolver,
            handler_use_case,
        }
    }

    pub fn server_handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.handler_use_case.clone())
    }
}
