/// One of the four canonical moves the player can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The per-axis step the snake actually travels with each tick.
///
/// Player input only ever produces one of the four [`Direction`]s, but a
/// scattered reset draws each axis independently from {-1, 0, 1}, so a
/// heading may also be diagonal or stationary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heading {
    pub dx: i32,
    pub dy: i32,
}

impl Heading {
    pub const STILL: Heading = Heading { dx: 0, dy: 0 };

    /// Build a heading, clamping each component into {-1, 0, 1}
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    /// The canonical direction this heading corresponds to, if any
    pub fn as_direction(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.delta() == (self.dx, self.dy))
    }

    /// True when `direction` points exactly against this heading.
    ///
    /// Diagonal and stationary headings have no reverse among the four
    /// directions, so nothing is rejected while travelling one of those.
    pub fn is_reversed_by(&self, direction: Direction) -> bool {
        self.as_direction()
            .is_some_and(|current| current.is_opposite(direction))
    }

    pub fn is_still(&self) -> bool {
        *self == Self::STILL
    }
}

impl From<Direction> for Heading {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { dx, dy }
    }
}
