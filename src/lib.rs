//! Apple Snake - a terminal Snake game with apples and rotten apples
//!
//! This library provides:
//! - Core game rules (game module), free of any I/O
//! - Keyboard input translation (input module)
//! - Terminal rendering behind a surface trait (render module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
