use anyhow::Result;

use crate::game::palette::{BACKGROUND_COLOR, BORDER_COLOR};
use crate::game::{GameState, Position, Rgb};
use crate::metrics::GameMetrics;

/// Figures shown alongside the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub length: usize,
    pub best_length: usize,
    pub resets: u32,
    pub elapsed: String,
}

impl Status {
    pub fn new(state: &GameState, metrics: &GameMetrics) -> Self {
        Self {
            length: state.snake.len(),
            best_length: metrics.best_length,
            resets: metrics.resets,
            elapsed: metrics.format_time(),
        }
    }
}

/// Something a frame can be composed on and shown.
pub trait Surface {
    /// Start a new frame filled with `background`
    fn clear(&mut self, background: Rgb);

    /// Fill one grid cell, outlined with `border`
    fn draw_tile(&mut self, position: Position, fill: Rgb, border: Rgb);

    /// Show the composed frame
    fn present(&mut self, status: &Status) -> Result<()>;
}

/// Compose the whole field onto `surface`: background, then snake, apple
/// and rotten apple in that order
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear(BACKGROUND_COLOR);
    for tile in state.tiles() {
        surface.draw_tile(tile.position, tile.color, BORDER_COLOR);
    }
}
