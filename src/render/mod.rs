//! Turning game state into frames
//!
//! [`draw_scene`] composes tiles onto any [`Surface`]; [`TerminalSurface`]
//! is the ratatui-backed one used when playing.

pub mod canvas;
pub mod renderer;
pub mod surface;

pub use canvas::{CanvasCell, TileCanvas};
pub use renderer::{Renderer, TerminalSurface};
pub use surface::{Status, Surface, draw_scene};
