use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use retro_snake::audio::{AudioSink, Silent, TerminalBell};
use retro_snake::game::GameConfig;
use retro_snake::modes::HumanMode;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retro_snake")]
#[command(version, about = "Retro snake game for the terminal")]
struct Cli {
    /// JSON config file; missing keys use their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells along each side of the board
    #[arg(long)]
    cell_count: Option<u32>,

    /// Render frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Disable the terminal bell sound cues
    #[arg(long)]
    mute: bool,

    /// Where to write the log (the terminal is taken by the game)
    #[arg(long, default_value = "retro_snake.log")]
    log_file: PathBuf,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(cell_count) = self.cell_count {
            config.cell_count = cell_count;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }

        config
            .validate()
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!("Starting Retro Snake with {:?}", config);

    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::new(std::io::stdout()))
    };

    let mut human_mode = HumanMode::new(config, audio);
    human_mode.run().await?;

    Ok(())
}
