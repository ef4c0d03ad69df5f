use clap::Parser;
use dnsplan_domain::CliOverrides;
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dnsplan")]
#[command(version)]
#[command(about = "dnsplan - Compile a DNS configuration section into resolver-ready JSON")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Geosite asset directory
    #[arg(short = 'a', long, value_name = "DIR")]
    assets: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<String>,

    /// Print single-line JSON instead of pretty-printed output
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        assets_path: cli.assets.clone(),
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.log);

    info!("Starting dnsplan v{}", env!("CARGO_PKG_VERSION"));

    let repos = di::Repositories::new(&config);
    let use_cases = di::UseCases::new(&repos);

    let built = match use_cases.build_dns_config.execute(&config.dns) {
        Ok(built) => built,
        Err(e) => {
            error!(error = %e, "Failed to build DNS configuration");
            return Ok(ExitCode::FAILURE);
        }
    };

    let output = if cli.compact {
        serde_json::to_string(&built)?
    } else {
        serde_json::to_string_pretty(&built)?
    };
    println!("{}", output);

    Ok(ExitCode::SUCCESS)
}
