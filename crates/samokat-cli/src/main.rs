mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "samokat-deals")]
#[command(about = "Send discounted Samokat products to a Telegram chat")]
struct Cli {
    /// Fetch and rank, print the report to stdout, and skip Telegram entirely.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = samokat_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");

    if cli.dry_run {
        let report = run::build_report(&config).await?;
        print!("{report}");
        return Ok(());
    }

    run::run_and_notify(&config).await
}

#[cfg(test)]
mod tests;
