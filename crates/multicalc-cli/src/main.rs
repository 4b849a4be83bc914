use clap::Parser;
use multicalc_cli::{Cli, MulticalcConfig, tracing_setup};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = MulticalcConfig::load(cli.config.as_deref())?.apply_profile();
    tracing_setup::init_tracing(&config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting multicalc");
    match &config.source {
        Some(path) => debug!(path = %path.display(), "Loaded configuration file"),
        None => debug!("No configuration file found, using defaults"),
    }

    let output = cli.execute(&config)?;
    println!("{output}");
    Ok(())
}
