use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_arcade::control::ArcadeFactory;
use grid_arcade::game::GameConfig;
use grid_arcade::modes::PlayMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_arcade")]
#[command(version, about = "Turn-based grid games in the terminal")]
struct Cli {
    /// Game to start with
    #[arg(long, default_value = "gold")]
    game: Game,

    /// Milliseconds between two game ticks
    #[arg(long, default_value = "150")]
    tick_ms: u64,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long, default_value = "grid_arcade.log")]
    log_file: PathBuf,
}

#[derive(Clone, ValueEnum)]
enum Game {
    /// Collect the wandering gold coins
    Gold,
    /// Classic snake
    Snake,
}

impl Game {
    fn name(&self) -> &'static str {
        match self {
            Game::Gold => ArcadeFactory::GOLD,
            Game::Snake => ArcadeFactory::SNAKE,
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let config = GameConfig::with_tick_interval_ms(cli.tick_ms);
    let mut play_mode = PlayMode::new(ArcadeFactory::new(config), cli.game.name());
    play_mode.run().await?;

    Ok(())
}
