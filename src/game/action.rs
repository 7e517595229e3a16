/// Direction an actor moves across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::North, Direction::South)
                | (Direction::South, Direction::North)
                | (Direction::East, Direction::West)
                | (Direction::West, Direction::East)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction.
    /// The y axis grows downwards, so North is `(0, -1)`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// A key as seen by the game rules.
///
/// Front ends translate their own key codes into this set; anything that is
/// not one of the four arrows becomes `Other`, which is also what the loop
/// feeds a model on ticks without input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Other,
}

impl Key {
    /// The direction this key asks for, if it is a directional key
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::North),
            Key::Down => Some(Direction::South),
            Key::Left => Some(Direction::West),
            Key::Right => Some(Direction::East),
            Key::Other => None,
        }
    }
}
