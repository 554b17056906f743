use clap::Parser;
use dnsfault_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsfault")]
#[command(version)]
#[command(about = "dnsfault - DNS server that answers every query with a chosen failure")]
struct Cli {
    /// Response mode: NOERROR, FORMERR, SERVFAIL, NOTIMPL or ICMP_ERROR
    #[arg(value_name = "MODE")]
    mode: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// ICMP type for ICMP_ERROR mode
    #[arg(long)]
    icmp_type: Option<u8>,

    /// ICMP code for ICMP_ERROR mode
    #[arg(long)]
    icmp_code: Option<u8>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        mode: cli.mode,
        bind_address: cli.bind,
        dns_port: cli.port,
        icmp_type: cli.icmp_type,
        icmp_code: cli.icmp_code,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsfault v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    server::run_dns_server(dns_services.socket, dns_services.use_case).await?;

    info!("Server shutdown complete");
    Ok(())
}
