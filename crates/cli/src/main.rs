use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tracing::{error, info};
use via6_dns_domain::CliOverrides;

mod bootstrap;
mod di;
mod lookup;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "via6-dns")]
#[command(version)]
#[command(about = "Via6 DNS - answers AAAA with 4-via-6 addresses built from IPv4 lookups")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the DNS proxy (default)
    Serve,
    /// Resolve one domain from the roots and print the answer
    Lookup {
        /// Domain name to resolve
        domain: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.bind.clone(),
        dns_port: cli.dns_port,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let dns_services = di::DnsServices::new(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Lookup { domain } => {
            if let Err(e) = lookup::run(&dns_services.resolver, &domain).await {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Serve => {
            info!("Starting Via6 DNS v{}", env!("CARGO_PKG_VERSION"));

            let dns_addr = config.server.listen_address();
            if let Err(e) = server::start_dns_server(dns_addr, dns_services.server_handler()).await {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
            Ok(())
        }
    }
}
