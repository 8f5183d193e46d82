//! Service entry point.

use anyhow::{Context, Result};
use clap::Parser;
use snaplink::config::Config;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener with expiring links and click analytics.
#[derive(Parser)]
#[command(name = "snaplink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Listen address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Log output format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    snaplink::server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
