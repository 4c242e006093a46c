//! File logging; the terminal itself belongs to the game screen

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Send log output to `path`, truncating it. Does nothing when `level` is
/// [`LogLevel::Off`].
pub fn init(path: &Path, level: LogLevel) -> Result<()> {
    if level == LogLevel::Off {
        return Ok(());
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level.into(), Config::default(), file)
        .context("Failed to initialize logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    }

    #[test]
    fn test_off_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.log");

        init(&path, LogLevel::Off).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("snake.log");

        let err = init(&path, LogLevel::Info).unwrap_err();

        assert!(err.to_string().contains("Failed to create log file"));
    }
}
