use tracing::debug;

use crate::error::{ArcadeError, ArcadeResult};
use crate::game::{GameConfig, GameModel, GoldModel, SnakeModel};

/// Creates fresh games by name
pub trait GameFactory {
    /// Names of every game this factory can create, for menus
    fn game_names(&self) -> &[&'static str];

    /// A new model for `name`, as listed by `game_names`
    fn create_game(&self, name: &str) -> ArcadeResult<GameModel>;
}

/// Factory for the games bundled with the crate
#[derive(Debug, Clone, Default)]
pub struct ArcadeFactory {
    config: GameConfig,
}

impl ArcadeFactory {
    pub const GOLD: &'static str = "Gold";
    pub const SNAKE: &'static str = "Snake";
    const GAMES: &'static [&'static str] = &[Self::GOLD, Self::SNAKE];

    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl GameFactory for ArcadeFactory {
    fn game_names(&self) -> &[&'static str] {
        Self::GAMES
    }

    fn create_game(&self, name: &str) -> ArcadeResult<GameModel> {
        let model = match name {
            Self::GOLD => GameModel::Gold(GoldModel::new(&self.config)),
            Self::SNAKE => GameModel::Snake(SnakeModel::new(&self.config)),
            other => return Err(ArcadeError::UnknownGame(other.to_string())),
        };

        debug!(game = name, "created game model");
        Ok(model)
    }
}
