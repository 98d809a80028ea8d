use std::fs::File;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use grid_snake::app::App;
use grid_snake::game::GameConfig;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "A terminal Snake arcade game")]
struct Cli {
    /// Cells along each side of the square grid
    #[arg(long, default_value = "25")]
    cell_count: usize,

    /// Milliseconds between logical ticks
    #[arg(long, default_value = "200")]
    tick_ms: u64,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ensure!(cli.cell_count >= 5, "grid must be at least 5x5 cells");
    ensure!(cli.tick_ms > 0, "tick interval must be positive");

    // The terminal belongs to the UI, so logs go to a file
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create("grid_snake.log").context("Failed to create log file")?,
    )
    .context("Failed to initialize logger")?;

    let config = GameConfig {
        cell_count: cli.cell_count,
        tick_interval_ms: cli.tick_ms,
        ..Default::default()
    };

    info!(
        "starting on a {}x{} grid, {}ms ticks",
        config.cell_count, config.cell_count, config.tick_interval_ms
    );

    let mut app = App::new(config, cli.mute)?;
    app.run().await
}
