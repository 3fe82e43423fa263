//! Step Awards CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing::info;

use step_awards_cli::config::{environment, CliConfig};
use step_awards_cli::{logging, run, Cli};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load()?;

    logging::init_tracing(config.log_format);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %environment(),
        "Starting step awards CLI"
    );

    let mut out = std::io::stdout().lock();
    run(cli, &config, &mut out)
}
