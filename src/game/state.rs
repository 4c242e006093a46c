use super::action::{Direction, Heading};
use super::collectible::{Collectible, CollectibleKind};
use super::palette::SNAKE_COLOR;
use super::tile::{Renderable, Tile};

/// A cell on the game grid, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one step along a heading
    pub fn moved_along(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.moved_by(dx, dy)
    }
}

/// The playing field: a torus of `width` x `height` cells, each `cell_size`
/// pixels square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, cell_size: usize) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The cell a freshly reset snake starts from
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Bring a position that stepped off one edge back in from the opposite
    /// edge, each axis on its own
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(
            wrap_axis(pos.x, self.width as i32),
            wrap_axis(pos.y, self.height as i32),
        )
    }

    /// Top-left pixel of a cell
    pub fn to_pixels(&self, pos: Position) -> (i32, i32) {
        let size = self.cell_size as i32;
        (pos.x * size, pos.y * size)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }
}

fn wrap_axis(value: i32, size: i32) -> i32 {
    if value < 0 {
        size - 1
    } else if value >= size {
        0
    } else {
        value
    }
}

/// What happened when the snake tried to take a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// The head moved onto `head`; `grew` is set when the tail was kept
    Moved { head: Position, grew: bool },
    /// The head would have landed on the body at `at`; nothing moved
    Collided { at: Position },
}

/// Outcome of losing a segment to a rotten apple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut {
    /// Target length dropped by one and the tail was removed
    Shrunk,
    /// The snake was already at length one and has to start over
    Exhausted,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Heading applied on the next step
    pub direction: Heading,
    /// Turn requested since the last step
    pub pending_direction: Option<Direction>,
    /// Length the body converges toward
    pub target_length: usize,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Position, direction: impl Into<Heading>) -> Self {
        Self {
            body: vec![head],
            direction: direction.into(),
            pending_direction: None,
            target_length: 1,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Option<Position> {
        self.body.last().copied()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Queue a turn for the next step.
    ///
    /// Returns false, leaving any earlier request in place, when `direction`
    /// would reverse the snake onto itself.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_reversed_by(direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Take one step along the current heading, wrapping around the grid.
    ///
    /// A queued turn is applied first. Landing on any segment past the neck
    /// leaves the body untouched and reports the collision.
    pub fn advance(&mut self, grid: &Grid) -> Movement {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction.into();
        }

        let new_head = grid.wrap(self.head().moved_along(self.direction));

        if self.body.iter().skip(2).any(|&segment| segment == new_head) {
            return Movement::Collided { at: new_head };
        }

        self.body.insert(0, new_head);
        let grew = self.body.len() <= self.target_length;
        if !grew {
            self.body.pop();
        }

        Movement::Moved {
            head: new_head,
            grew,
        }
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Lose one segment right away.
    ///
    /// The head is never removed: a snake that has not yet grown into its
    /// target length may be a single cell with a target above one.
    pub fn cut(&mut self) -> Cut {
        if self.target_length > 1 {
            self.target_length -= 1;
            if self.body.len() > 1 {
                self.body.pop();
            }
            Cut::Shrunk
        } else {
            Cut::Exhausted
        }
    }

    /// Start over as a single cell at `head`
    pub fn respawn(&mut self, head: Position, direction: Heading) {
        self.body.clear();
        self.body.push(head);
        self.direction = direction;
        self.pending_direction = None;
        self.target_length = 1;
    }
}

impl Renderable for Snake {
    fn tiles(&self) -> Vec<Tile> {
        self.body
            .iter()
            .map(|&position| Tile::new(position, SNAKE_COLOR))
            .collect()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Collectible,
    pub rotten_apple: Collectible,
    pub grid: Grid,
    pub ticks: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Position, rotten_apple: Position, grid: Grid) -> Self {
        Self {
            snake,
            apple: Collectible::new(CollectibleKind::Grows, apple),
            rotten_apple: Collectible::new(CollectibleKind::Shrinks, rotten_apple),
            grid,
            ticks: 0,
        }
    }

    pub fn collectible(&self, kind: CollectibleKind) -> &Collectible {
        match kind {
            CollectibleKind::Grows => &self.apple,
            CollectibleKind::Shrinks => &self.rotten_apple,
        }
    }

    pub fn collectible_mut(&mut self, kind: CollectibleKind) -> &mut Collectible {
        match kind {
            CollectibleKind::Grows => &mut self.apple,
            CollectibleKind::Shrinks => &mut self.rotten_apple,
        }
    }

    /// Everything on the field in draw order; later tiles cover earlier ones
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles = self.snake.tiles();
        tiles.extend(self.apple.tiles());
        tiles.extend(self.rotten_apple.tiles());
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(32, 24, 20)
    }

    /// Snake laid out from `cells`, head first, already at its target length
    fn snake_with_body(cells: &[(i32, i32)], direction: Direction) -> Snake {
        let mut snake = Snake::new(Position::new(cells[0].0, cells[0].1), direction);
        snake.body = cells.iter().map(|&(x, y)| Position::new(x, y)).collect();
        snake.target_length = cells.len();
        snake
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_along(Heading::new(1, -1)), Position::new(6, 4));
    }

    #[test]
    fn test_pixel_conversion() {
        let grid = grid();
        assert_eq!(grid.center(), Position::new(16, 12));
        assert_eq!(grid.to_pixels(grid.center()), (320, 240));
        assert_eq!(grid.to_pixels(Position::new(17, 12)), (340, 240));
        assert_eq!(grid.to_pixels(Position::new(0, 23)), (0, 460));
    }

    #[test]
    fn test_wrap_each_axis() {
        let grid = grid();
        assert_eq!(grid.wrap(Position::new(-1, 5)), Position::new(31, 5));
        assert_eq!(grid.wrap(Position::new(32, 5)), Position::new(0, 5));
        assert_eq!(grid.wrap(Position::new(5, -1)), Position::new(5, 23));
        assert_eq!(grid.wrap(Position::new(5, 24)), Position::new(5, 0));
        assert_eq!(grid.wrap(Position::new(-1, 24)), Position::new(31, 0));
        assert_eq!(grid.wrap(Position::new(7, 9)), Position::new(7, 9));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(3, 2, 20);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[5], Position::new(2, 1));
        assert!(cells.iter().all(|&cell| grid.contains(cell)));
    }

    #[test]
    fn test_advance_at_target_length_keeps_length() {
        let mut snake = snake_with_body(&[(5, 5), (4, 5), (3, 5)], Direction::Right);

        let movement = snake.advance(&grid());

        assert_eq!(
            movement,
            Movement::Moved {
                head: Position::new(6, 5),
                grew: false
            }
        );
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Some(Position::new(4, 5)));
    }

    #[test]
    fn test_advance_below_target_length_grows() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.grow();

        let movement = snake.advance(&grid());

        assert_eq!(
            movement,
            Movement::Moved {
                head: Position::new(6, 5),
                grew: true
            }
        );
        assert_eq!(snake.body, vec![Position::new(6, 5), Position::new(5, 5)]);
    }

    #[test]
    fn test_advance_wraps_around_edges() {
        let mut snake = Snake::new(Position::new(0, 0), Direction::Left);
        snake.advance(&grid());
        assert_eq!(snake.head(), Position::new(31, 0));

        snake.steer(Direction::Up);
        snake.advance(&grid());
        assert_eq!(snake.head(), Position::new(31, 23));
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);

        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.pending_direction, None);

        assert!(snake.steer(Direction::Up));
        // Checked against the applied heading, not the queued one
        assert!(snake.steer(Direction::Down));
        assert_eq!(snake.pending_direction, Some(Direction::Down));

        snake.advance(&grid());
        assert_eq!(snake.direction, Heading::from(Direction::Down));
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_neck_is_not_a_collision() {
        // Stationary heading puts the new head onto the current head
        let mut snake = snake_with_body(&[(5, 5), (4, 5)], Direction::Right);
        snake.direction = Heading::STILL;

        let movement = snake.advance(&grid());

        assert!(matches!(movement, Movement::Moved { .. }));
    }

    #[test]
    fn test_collision_past_the_neck() {
        // Head at (5,5) heading down into (5,6), which is the fourth segment
        let mut snake =
            snake_with_body(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)], Direction::Left);
        snake.steer(Direction::Down);
        let before = snake.body.clone();

        let movement = snake.advance(&grid());

        assert_eq!(
            movement,
            Movement::Collided {
                at: Position::new(5, 6)
            }
        );
        assert_eq!(snake.body, before);
    }

    #[test]
    fn test_single_cell_never_collides() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        for _ in 0..100 {
            assert!(matches!(snake.advance(&grid()), Movement::Moved { .. }));
        }
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_cut_shrinks_immediately() {
        let mut snake = snake_with_body(&[(5, 5), (4, 5), (3, 5)], Direction::Right);

        assert_eq!(snake.cut(), Cut::Shrunk);
        assert_eq!(snake.target_length, 2);
        assert_eq!(snake.body, vec![Position::new(5, 5), Position::new(4, 5)]);
    }

    #[test]
    fn test_cut_at_length_one_is_exhausted() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        assert_eq!(snake.cut(), Cut::Exhausted);
        assert_eq!(snake.target_length, 1);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_cut_keeps_head_while_still_growing() {
        // Target raised to two in the same tick the single cell is cut
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.grow();

        assert_eq!(snake.cut(), Cut::Shrunk);
        assert_eq!(snake.target_length, 1);
        assert_eq!(snake.body, vec![Position::new(5, 5)]);
    }

    #[test]
    fn test_respawn() {
        let mut snake = snake_with_body(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        snake.pending_direction = Some(Direction::Up);

        snake.respawn(Position::new(16, 12), Heading::new(-1, 1));

        assert_eq!(snake.body, vec![Position::new(16, 12)]);
        assert_eq!(snake.target_length, 1);
        assert_eq!(snake.direction, Heading::new(-1, 1));
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_snake_tiles() {
        let snake = snake_with_body(&[(5, 5), (4, 5)], Direction::Right);
        let tiles = snake.tiles();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|tile| tile.color == SNAKE_COLOR));
        assert_eq!(tiles[0].position, Position::new(5, 5));
    }

    #[test]
    fn test_state_tiles_draw_order() {
        let state = GameState::new(
            Snake::new(Position::new(1, 1), Direction::Right),
            Position::new(2, 2),
            Position::new(3, 3),
            grid(),
        );

        let tiles = state.tiles();

        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[1].position, Position::new(2, 2));
        assert_eq!(tiles[2].position, Position::new(3, 3));
        assert_eq!(state.collectible(CollectibleKind::Shrinks).position, Position::new(3, 3));
    }
}
