use super::action::Key;
use super::gold::{GoldModel, GoldTile};
use super::position::Position;
use super::snake::{SnakeModel, SnakeTile};
use crate::error::GameOver;

/// A tile as seen by a front end, tagged with the game it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Gold(GoldTile),
    Snake(SnakeTile),
}

impl TileKind {
    /// True for cells with nothing on them, in either game
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            TileKind::Gold(GoldTile::Empty) | TileKind::Snake(SnakeTile::Empty)
        )
    }
}

/// One running game: every rule variant the engine knows about.
///
/// The loop only talks to this type, so adding a game means adding a variant
/// here and in the factory.
pub enum GameModel {
    Gold(GoldModel),
    Snake(SnakeModel),
}

impl GameModel {
    /// Advance the game by one tick.
    ///
    /// Returns `Err(GameOver)` once the rules end the game; the model must not
    /// be updated after that.
    pub fn update(&mut self, key: Key) -> Result<(), GameOver> {
        match self {
            GameModel::Gold(model) => model.update(key),
            GameModel::Snake(model) => model.update(key),
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            GameModel::Gold(model) => model.score(),
            GameModel::Snake(model) => model.score(),
        }
    }

    /// Board size as `(width, height)`
    pub fn board_size(&self) -> (usize, usize) {
        match self {
            GameModel::Gold(model) => (model.board().width(), model.board().height()),
            GameModel::Snake(model) => (model.board().width(), model.board().height()),
        }
    }

    /// The tile at `(x, y)`; callers stay within `board_size`
    pub fn tile_at(&self, x: usize, y: usize) -> TileKind {
        let pos = Position::new(x as i32, y as i32);
        match self {
            GameModel::Gold(model) => TileKind::Gold(model.board().get(pos)),
            GameModel::Snake(model) => TileKind::Snake(model.board().get(pos)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameModel::Gold(_) => "Gold",
            GameModel::Snake(_) => "Snake",
        }
    }
}

impl From<GoldModel> for GameModel {
    fn from(model: GoldModel) -> Self {
        GameModel::Gold(model)
    }
}

impl From<SnakeModel> for GameModel {
    fn from(model: SnakeModel) -> Self {
        GameModel::Snake(model)
    }
}
