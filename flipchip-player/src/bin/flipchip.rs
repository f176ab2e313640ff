use clap::Parser;
use flipchip_player::connectors::TerminalConnector;
use flipchip_player::{Config, Overrides, PlayerError, Session};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play Othello against a greedy computer opponent. You are White and move first.
#[derive(Parser)]
#[command(name = "flipchip")]
struct Args {
    /// YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer's cell ordering.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after highlighting each computer move, in milliseconds.
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Log filter, e.g. "flipchip_othello=debug". Defaults to RUST_LOG, then "warn".
    #[arg(long)]
    log: Option<String>,
}

fn init_logging(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), PlayerError> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = config.with_overrides(&Overrides {
        seed: args.seed,
        computer_delay_ms: args.delay_ms,
    })?;

    let mut session = Session::new(TerminalConnector::stdio(), config);
    session.run()
}
