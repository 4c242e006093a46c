//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! Drawing backends consume [`Tile`]s through the [`Renderable`] trait.

pub mod action;
pub mod collectible;
pub mod config;
pub mod engine;
pub mod palette;
pub mod state;
pub mod tile;

// Re-export commonly used types
pub use action::{Direction, Heading};
pub use collectible::{Collectible, CollectibleKind};
pub use config::{ConfigError, GameConfig, ResetHeading, SpawnPolicy};
pub use engine::{GameEngine, TickReport};
pub use palette::Rgb;
pub use state::{Cut, GameState, Grid, Movement, Position, Snake};
pub use tile::{Renderable, Tile};
