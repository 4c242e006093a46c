use super::palette::{APPLE_COLOR, ROTTEN_APPLE_COLOR, Rgb};
use super::state::Position;
use super::tile::{Renderable, Tile};

/// What eating a collectible does to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    /// A fresh apple: the snake grows by one
    Grows,
    /// A rotten apple: the snake loses a segment
    Shrinks,
}

impl CollectibleKind {
    pub fn color(&self) -> Rgb {
        match self {
            CollectibleKind::Grows => APPLE_COLOR,
            CollectibleKind::Shrinks => ROTTEN_APPLE_COLOR,
        }
    }

    /// The kind sharing the field with this one
    pub fn other(&self) -> CollectibleKind {
        match self {
            CollectibleKind::Grows => CollectibleKind::Shrinks,
            CollectibleKind::Shrinks => CollectibleKind::Grows,
        }
    }
}

/// A single-cell item on the field, moved elsewhere whenever it is eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub position: Position,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl Renderable for Collectible {
    fn tiles(&self) -> Vec<Tile> {
        vec![Tile::new(self.position, self.kind.color())]
    }
}
