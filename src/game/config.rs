use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use super::state::Grid;

/// Largest grid side the terminal renderer can lay out
pub const MAX_GRID_DIMENSION: usize = 512;

/// Reasons a configuration cannot be played with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid {width}x{height} exceeds the maximum of {max} cells per side")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    #[error("unknown {option} '{value}'")]
    UnknownOption { option: &'static str, value: String },
}

/// Where an eaten apple may reappear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpawnPolicy {
    /// Any cell, even one under the snake or the other apple
    #[default]
    Anywhere,
    /// Only cells nothing else occupies, when there are any
    AvoidOccupied,
}

/// How a reset picks the snake's new heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetHeading {
    /// Each axis drawn from {-1, 0, 1}; may be diagonal or stationary
    #[default]
    Scatter,
    /// One of the four directions
    Cardinal,
}

impl FromStr for SpawnPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anywhere" => Ok(SpawnPolicy::Anywhere),
            "avoid-occupied" => Ok(SpawnPolicy::AvoidOccupied),
            other => Err(ConfigError::UnknownOption {
                option: "spawn policy",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SpawnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnPolicy::Anywhere => write!(f, "anywhere"),
            SpawnPolicy::AvoidOccupied => write!(f, "avoid-occupied"),
        }
    }
}

impl FromStr for ResetHeading {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scatter" => Ok(ResetHeading::Scatter),
            "cardinal" => Ok(ResetHeading::Cardinal),
            other => Err(ConfigError::UnknownOption {
                option: "reset heading",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ResetHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetHeading::Scatter => write!(f, "scatter"),
            ResetHeading::Cardinal => write!(f, "cardinal"),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Side of one cell in pixels
    pub cell_size: usize,
    /// How many times per second the snake moves
    pub ticks_per_second: u32,
    pub spawn_policy: SpawnPolicy,
    pub reset_heading: ResetHeading,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            ticks_per_second: 20,
            spawn_policy: SpawnPolicy::default(),
            reset_heading: ResetHeading::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a configuration from a JSON file; missing fields keep their
    /// defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_width > MAX_GRID_DIMENSION || self.grid_height > MAX_GRID_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_DIMENSION,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height, self.cell_size)
    }

    /// Size of the whole field in pixels
    pub fn field_size(&self) -> (usize, usize) {
        (
            self.grid_width * self.cell_size,
            self.grid_height * self.cell_size,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
