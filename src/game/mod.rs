//! Game rules
//!
//! Everything in here is plain state and rules, without threads, I/O or
//! rendering. The [`GameModel`] enum is the single contract the loop and the
//! front ends use; [`GoldModel`] and [`SnakeModel`] are its rule variants.

pub mod action;
pub mod board;
pub mod config;
pub mod gold;
pub mod model;
pub mod position;
pub mod snake;

// Re-export commonly used types
pub use action::{Direction, Key};
pub use board::{Board, BOARD_HEIGHT, BOARD_WIDTH};
pub use config::GameConfig;
pub use gold::{GoldModel, GoldTile};
pub use model::{GameModel, TileKind};
pub use position::Position;
pub use snake::{SnakeModel, SnakeTile};
