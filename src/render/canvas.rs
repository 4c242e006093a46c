use crate::game::{Grid, Position, Rgb};

/// A filled grid cell as it should appear on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasCell {
    pub fill: Rgb,
    pub border: Rgb,
}

/// One frame of the field, cell by cell, before it is turned into terminal
/// output
#[derive(Debug, Clone, PartialEq)]
pub struct TileCanvas {
    width: usize,
    height: usize,
    background: Rgb,
    cells: Vec<Option<CanvasCell>>,
}

impl TileCanvas {
    pub fn new(grid: &Grid, background: Rgb) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            background,
            cells: vec![None; grid.cell_count()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn clear(&mut self, background: Rgb) {
        self.background = background;
        self.cells.fill(None);
    }

    /// Paint one cell; later fills win. Positions off the canvas are ignored.
    pub fn fill(&mut self, position: Position, fill: Rgb, border: Rgb) {
        if let Some(index) = self.index(position) {
            self.cells[index] = Some(CanvasCell { fill, border });
        }
    }

    pub fn cell(&self, position: Position) -> Option<CanvasCell> {
        self.index(position).and_then(|index| self.cells[index])
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<CanvasCell>]> {
        self.cells.chunks(self.width.max(1))
    }

    fn index(&self, position: Position) -> Option<usize> {
        let (x, y) = (position.x, position.y);
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::palette::{APPLE_COLOR, BACKGROUND_COLOR, BORDER_COLOR, SNAKE_COLOR};

    fn canvas() -> TileCanvas {
        TileCanvas::new(&Grid::new(4, 3, 20), BACKGROUND_COLOR)
    }

    #[test]
    fn test_fill_and_read_back() {
        let mut canvas = canvas();
        canvas.fill(Position::new(3, 2), SNAKE_COLOR, BORDER_COLOR);

        assert_eq!(
            canvas.cell(Position::new(3, 2)),
            Some(CanvasCell {
                fill: SNAKE_COLOR,
                border: BORDER_COLOR
            })
        );
        assert_eq!(canvas.cell(Position::new(0, 0)), None);
    }

    #[test]
    fn test_later_fill_wins() {
        let mut canvas = canvas();
        canvas.fill(Position::new(1, 1), SNAKE_COLOR, BORDER_COLOR);
        canvas.fill(Position::new(1, 1), APPLE_COLOR, BORDER_COLOR);

        assert_eq!(canvas.cell(Position::new(1, 1)).map(|c| c.fill), Some(APPLE_COLOR));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = canvas();
        canvas.fill(Position::new(4, 0), SNAKE_COLOR, BORDER_COLOR);
        canvas.fill(Position::new(-1, 0), SNAKE_COLOR, BORDER_COLOR);

        assert!(canvas.rows().flatten().all(Option::is_none));
    }

    #[test]
    fn test_clear() {
        let mut canvas = canvas();
        canvas.fill(Position::new(0, 0), SNAKE_COLOR, BORDER_COLOR);
        canvas.clear(Rgb(1, 2, 3));

        assert_eq!(canvas.background(), Rgb(1, 2, 3));
        assert_eq!(canvas.cell(Position::new(0, 0)), None);
        assert_eq!(canvas.rows().count(), 3);
    }
}
