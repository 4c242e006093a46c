use super::palette::Rgb;
use super::state::Position;

/// One grid cell to be filled with a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub position: Position,
    pub color: Rgb,
}

impl Tile {
    pub fn new(position: Position, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// Anything that occupies cells on the field and knows how it looks.
///
/// Drawing backends only ever see tiles; how a tile becomes pixels or
/// terminal cells is up to them.
pub trait Renderable {
    fn tiles(&self) -> Vec<Tile>;
}
