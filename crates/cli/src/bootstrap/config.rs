use tracing::info;
use via6_dns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?;

    info!(
        bind_address = %config.server.bind_address,
        dns_port = config.server.dns_port,
        upstream = %config.upstream.address,
        lookup_mode = config.resolver.lookup_mode.as_str(),
        "Configuration loaded"
    );

    Ok(config)
}
