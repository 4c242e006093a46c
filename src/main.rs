use anyhow::Result;
use apple_snake::game::{GameConfig, ResetHeading, SpawnPolicy};
use apple_snake::logging::{self, LogLevel};
use apple_snake::modes::HumanMode;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apple_snake")]
#[command(version, about = "Snake with apples that grow it and rotten apples that shrink it")]
struct Cli {
    /// JSON file with game settings; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Snake moves per second
    #[arg(long)]
    speed: Option<u32>,

    /// Where eaten apples reappear: anywhere, avoid-occupied
    #[arg(long)]
    spawn_policy: Option<SpawnPolicy>,

    /// Heading after a reset: scatter, cardinal
    #[arg(long)]
    reset_heading: Option<ResetHeading>,

    /// Log file
    #[arg(long, default_value = "apple_snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.ticks_per_second = speed;
        }
        if let Some(policy) = self.spawn_policy {
            config.spawn_policy = policy;
        }
        if let Some(heading) = self.reset_heading {
            config.reset_heading = heading;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_file, cli.log_level)?;

    let config = cli.game_config()?;
    config
        .validate()
        .inspect_err(|err| error!("invalid configuration: {err}"))?;
    let (field_width, field_height) = config.field_size();
    info!(
        "starting on a {}x{} grid ({field_width}x{field_height} px) at {} ticks/s (spawn: {}, reset heading: {})",
        config.grid_width,
        config.grid_height,
        config.ticks_per_second,
        config.spawn_policy,
        config.reset_heading
    );

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = Cli::parse_from(["apple_snake"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "apple_snake",
            "--width",
            "20",
            "--speed",
            "8",
            "--spawn-policy",
            "avoid-occupied",
            "--reset-heading",
            "cardinal",
            "--log-level",
            "off",
        ]);

        let config = cli.game_config().unwrap();

        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.ticks_per_second, 8);
        assert_eq!(config.spawn_policy, SpawnPolicy::AvoidOccupied);
        assert_eq!(config.reset_heading, ResetHeading::Cardinal);
        assert_eq!(cli.log_level, LogLevel::Off);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "grid_width": 12, "grid_height": 9 }"#).unwrap();

        let cli = Cli::parse_from([
            "apple_snake",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "11",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 11);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Cli::try_parse_from(["apple_snake", "--spawn-policy", "nowhere"]).is_err());
    }
}
