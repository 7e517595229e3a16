//! Gold collector game
//!
//! A collector starts in the middle of the board, surrounded by coins. It keeps
//! moving in its current direction; arrow keys steer it. Every collected coin
//! is worth two points. On each tick the oldest coin still on the board jumps
//! to a new random cell, so coins appear to wander. The game is won (five bonus
//! points) when every coin is collected and lost when the collector leaves the
//! board.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::{Direction, Key};
use super::board::Board;
use super::config::GameConfig;
use super::position::Position;
use crate::error::GameOver;

const COIN_SCORE: u32 = 2;
const WIN_BONUS: u32 = 5;

/// What a cell of the Gold board holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoldTile {
    Empty,
    Coin,
    Collector,
}

pub struct GoldModel {
    board: Board<GoldTile>,
    collector: Position,
    direction: Direction,
    /// Oldest coin first
    coins: Vec<Position>,
    score: u32,
    rng: StdRng,
}

impl GoldModel {
    /// Create a new Gold game seeded from system entropy
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new Gold game with a reproducible coin layout
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let board = Board::new(GoldTile::Empty);
        let collector = Position::new((board.width() / 2) as i32, (board.height() / 2) as i32);
        // Every cell but the collector's can hold a coin; more would never be placed.
        let coin_count = config.gold_coin_count.min(board.width() * board.height() - 1);

        let mut model = Self {
            board,
            collector,
            direction: Direction::North,
            coins: Vec::with_capacity(coin_count),
            score: 0,
            rng,
        };
        model.board.set(collector, GoldTile::Collector);

        for _ in 0..coin_count {
            model.add_coin();
        }

        model
    }

    /// Advance the game by one tick
    pub fn update(&mut self, key: Key) -> Result<(), GameOver> {
        if let Some(direction) = key.direction() {
            self.direction = direction;
        }

        let next = self.collector.moved_in_direction(self.direction);
        if !self.board.contains(next) {
            return Err(GameOver { score: self.score });
        }

        self.board.set(self.collector, GoldTile::Empty);
        self.collector = next;
        self.board.set(next, GoldTile::Collector);

        if let Some(index) = self.coins.iter().position(|&coin| coin == next) {
            self.coins.remove(index);
            self.score += COIN_SCORE;
        }

        if self.coins.is_empty() {
            self.score += WIN_BONUS;
            return Err(GameOver { score: self.score });
        }

        // Move one coin per tick: always the oldest, whatever was collected.
        let oldest = self.coins.remove(0);
        self.board.set(oldest, GoldTile::Empty);
        self.add_coin();

        Ok(())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board<GoldTile> {
        &self.board
    }

    pub fn collector(&self) -> Position {
        self.collector
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Active coins, oldest first
    pub fn coins(&self) -> &[Position] {
        &self.coins
    }

    /// Place a coin on a random empty cell.
    ///
    /// Rejection sampling; the coin count is capped so an empty cell always
    /// exists.
    fn add_coin(&mut self) {
        let pos = loop {
            let x = self.rng.gen_range(0..self.board.width()) as i32;
            let y = self.rng.gen_range(0..self.board.height()) as i32;
            let pos = Position::new(x, y);

            if self.board.get(pos) == GoldTile::Empty {
                break pos;
            }
        };

        self.board.set(pos, GoldTile::Coin);
        self.coins.push(pos);
    }

    #[cfg(test)]
    fn from_layout(collector: Position, direction: Direction, coins: &[Position]) -> Self {
        let mut board = Board::new(GoldTile::Empty);
        board.set(collector, GoldTile::Collector);
        for &coin in coins {
            board.set(coin, GoldTile::Coin);
        }

        Self {
            board,
            collector,
            direction,
            coins: coins.to_vec(),
            score: 0,
            rng: StdRng::seed_from_u64(7),
        }
    }
}
