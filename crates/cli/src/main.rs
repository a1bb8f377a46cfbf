use clap::Parser;
use dnslink_domain::CliOverrides;
use output::{Format, RenderOptions};
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "dnslink")]
#[command(version)]
#[command(about = "Resolve DNSLink records for one or more domains")]
struct Cli {
    /// Domains to resolve, optionally followed by /path?query
    #[arg(required = true, value_name = "DOMAIN")]
    lookups: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Txt)]
    format: Format,

    /// Only print identifiers of this namespace
    #[arg(short = 'k', long)]
    key: Option<String>,

    /// Print the resolution log to stderr
    #[arg(short = 'd', long)]
    debug: bool,

    /// Follow dnslink=/dnslink/<domain> redirects
    #[arg(short = 'r', long)]
    recursive: bool,

    /// DNS server to query over UDP (host or host:port), repeatable
    #[arg(long = "dns", value_name = "SERVER")]
    dns: Vec<String>,

    /// EDNS(0) UDP payload size
    #[arg(long)]
    udp_size: Option<u16>,

    /// Deadline per TXT lookup in milliseconds (0 disables)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Percent-decode entry identifiers
    #[arg(long)]
    decode_identifiers: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        servers: cli.dns.clone(),
        udp_size: cli.udp_size,
        timeout_ms: cli.timeout_ms,
        recursive: cli.recursive,
        decode_identifiers: cli.decode_identifiers,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        recursive = config.resolve.recursive,
        "Starting dnslink"
    );

    let use_case = di::build_use_case(&config).await?;

    let options = RenderOptions {
        multiple: cli.lookups.len() > 1,
        debug: cli.debug,
        key: cli.key.clone(),
    };
    let mut renderer = output::create_renderer(cli.format, options);

    renderer.begin()?;
    let mut failed = false;
    for lookup in &cli.lookups {
        match use_case.execute(lookup, config.resolve.recursive).await {
            Ok(resolution) => renderer.write(lookup, &resolution)?,
            Err(e) => {
                debug!(lookup = %lookup, error = %e, "Resolution failed");
                failed = true;
                renderer.write_error(lookup, &e)?;
            }
        }
    }
    renderer.end()?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
