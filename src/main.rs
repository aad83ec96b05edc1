use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use hotel_reservation_system::{Hotel, HotelConfig, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotel-reservation", version, about = "Interactive hotel room reservation console")]
struct Cli {
    /// JSON file describing the room catalog (defaults to the built-in six rooms)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter for diagnostics written to stderr
    #[arg(long, env = "HOTEL_LOG", default_value = "warn")]
    log_filter: String,
}

fn init_logging(filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_filter)?;

    let config = match &cli.config {
        Some(path) => HotelConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => HotelConfig::default(),
    };
    let catalog = config.build_catalog().context("invalid room catalog")?;
    tracing::debug!(rooms = catalog.len(), "catalog ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Hotel::new(catalog), stdin.lock(), stdout.lock());
    session.run().context("console session failed")?;

    Ok(())
}
