use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::PlayMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a fixed grid, played in the terminal")]
struct Cli {
    /// Grid rows
    #[arg(long, default_value = "15")]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value = "15")]
    columns: usize,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between snake moves
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The TUI owns the terminal, so logs only go to a file when one is given.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    // Create game configuration from CLI arguments
    let mut config = GameConfig::new(cli.rows, cli.columns);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut play_mode = PlayMode::new(config, Duration::from_millis(cli.tick_ms.max(1)))?;
    play_mode.run().await?;

    Ok(())
}
