//! Colors of everything the game draws

/// A plain 24-bit color, independent of any drawing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);
pub const APPLE_COLOR: Rgb = Rgb(255, 0, 0);
pub const ROTTEN_APPLE_COLOR: Rgb = Rgb(63, 64, 57);
