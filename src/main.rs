use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use turn_snake::game::{Size, SnakeConfig};
use turn_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "turn_snake")]
#[command(version, about = "Snake that rebuilds its body from the turns it made")]
struct Cli {
    /// JSON file with a full or partial game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Block (grid cell) size in pixels
    #[arg(long)]
    block: Option<i32>,

    /// Drawn segment size in pixels
    #[arg(long)]
    snake: Option<i32>,

    /// Initial delay between moves, in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// Write logs here; the terminal itself is taken by the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Start from the config file (or defaults) and apply flag overrides
    fn resolve_config(&self) -> Result<SnakeConfig> {
        let mut config = match &self.config {
            Some(path) => SnakeConfig::load(path)?,
            None => SnakeConfig::default(),
        };

        if let Some(width) = self.width {
            config.bounds.width = width;
        }
        if let Some(height) = self.height {
            config.bounds.height = height;
        }
        if let Some(block) = self.block {
            config.block_size = Size::square(block);
        }
        if let Some(snake) = self.snake {
            config.snake_size = Size::square(snake);
        }
        if let Some(delay) = self.delay {
            config.move_delay_ms = delay;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let config = cli.resolve_config()?;
    tracing::info!(?config, "configuration resolved");

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "turn_snake",
            "--width",
            "400",
            "--height",
            "200",
            "--delay",
            "250",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.bounds, Size::new(400, 200));
        assert_eq!(config.move_delay_ms, 250);
        assert_eq!(config.block_size, Size::square(40));
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = Cli::parse_from(["turn_snake", "--block", "40", "--snake", "10"]);
        assert!(cli.resolve_config().is_err());

        let cli = Cli::parse_from(["turn_snake", "--delay", "50"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "move_delay_ms": 300, "bounds": { "width": 480, "height": 480 } }"#)
            .unwrap();

        let cli = Cli::parse_from([
            "turn_snake",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "240",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.bounds, Size::new(480, 240));
        assert_eq!(config.move_delay_ms, 300);
    }
}
