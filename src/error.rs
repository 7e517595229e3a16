use thiserror::Error;

/// Raised by a model when its rules end the game.
///
/// This is the normal way for a run to finish, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("game over, final score {score}")]
pub struct GameOver {
    pub score: u32,
}

#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("no game named {0:?}")]
    UnknownGame(String),
    #[error("failed to spawn the game loop thread")]
    Spawn(#[from] std::io::Error),
}

pub type ArcadeResult<T> = std::result::Result<T, ArcadeError>;
