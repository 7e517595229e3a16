use super::position::Position;

/// Width of every game board
pub const BOARD_WIDTH: usize = 10;
/// Height of every game board
pub const BOARD_HEIGHT: usize = 10;

/// A fixed-size grid of tiles.
///
/// `T` is the closed tile enumeration of a single game. The board never
/// checks coordinates on access: callers test them with [`Board::contains`]
/// first, which is the same test the rules use to detect leaving the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy + PartialEq> Board<T> {
    /// Create a `BOARD_WIDTH` x `BOARD_HEIGHT` board filled with `tile`
    pub fn new(tile: T) -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT, tile)
    }

    pub(crate) fn with_size(width: usize, height: usize, tile: T) -> Self {
        Self {
            width,
            height,
            cells: vec![tile; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a position is within the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    pub fn get(&self, pos: Position) -> T {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, tile: T) {
        let index = self.index(pos);
        self.cells[index] = tile;
    }

    /// Overwrite every cell with `tile`
    pub fn fill(&mut self, tile: T) {
        self.cells.iter_mut().for_each(|cell| *cell = tile);
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: T) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }

    /// Positions of all cells holding `tile`, row by row
    pub fn positions_of(&self, tile: T) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == tile)
            .map(|(index, _)| {
                Position::new((index % self.width) as i32, (index / self.width) as i32)
            })
            .collect()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{pos:?} is outside the board");
        pos.y as usize * self.width + pos.x as usize
    }
}
