//! Snake game
//!
//! The snake starts coiled up on the center cell and unrolls as it moves.
//! Eating the fruit scores a point and grows the snake by one segment. Running
//! into a wall or into its own body ends the game, as does filling the whole
//! board.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;

use super::action::{Direction, Key};
use super::board::Board;
use super::config::GameConfig;
use super::position::Position;
use crate::error::GameOver;

/// What a cell of the Snake board holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnakeTile {
    Empty,
    Fruit,
    Body,
    Head,
}

pub struct SnakeModel {
    board: Board<SnakeTile>,
    /// Tail at the front, head at the back
    segments: VecDeque<Position>,
    direction: Direction,
    fruit: Option<Position>,
    score: u32,
    rng: StdRng,
}

impl SnakeModel {
    /// Create a new Snake game seeded from system entropy
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new Snake game with a reproducible fruit sequence
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let board = Board::new(SnakeTile::Empty);
        let center = Position::new((board.width() / 2) as i32, (board.height() / 2) as i32);
        let length = config.snake_initial_length.max(1);

        let mut model = Self {
            board,
            segments: std::iter::repeat(center).take(length).collect(),
            direction: Direction::North,
            fruit: None,
            score: 0,
            rng,
        };
        model.board.set(center, SnakeTile::Head);
        model.fruit = model.place_fruit();

        model
    }

    /// Advance the game by one tick
    pub fn update(&mut self, key: Key) -> Result<(), GameOver> {
        self.steer(key);

        let head = self.head();
        let next = head.moved_in_direction(self.direction);
        if !self.board.contains(next) {
            return Err(GameOver { score: self.score });
        }

        let mut vacated = None;
        if self.board.get(next) == SnakeTile::Fruit {
            // The fruit cell becomes the head, so it does not count as free.
            if self.board.count(SnakeTile::Empty) == 0 {
                return Err(GameOver { score: self.score });
            }
            self.score += 1;
            self.fruit = self.place_fruit();
        } else if let Some(tail) = self.segments.pop_front() {
            // Segments start stacked on one cell; keep the tile until the last leaves.
            if !self.segments.contains(&tail) {
                self.board.set(tail, SnakeTile::Empty);
            }
            vacated = Some(tail);
        }

        // Checked after the tail moved, so following the tail is allowed.
        if self.board.get(next) == SnakeTile::Body && vacated != Some(next) {
            return Err(GameOver { score: self.score });
        }

        if self.segments.contains(&head) {
            self.board.set(head, SnakeTile::Body);
        }
        self.segments.push_back(next);
        self.board.set(next, SnakeTile::Head);

        Ok(())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board<SnakeTile> {
        &self.board
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fruit(&self) -> Option<Position> {
        self.fruit
    }

    /// Body segments, tail first
    pub fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Current head position. The head is the last segment pushed.
    fn head(&self) -> Position {
        self.segments.back().copied().unwrap_or_else(|| {
            Position::new((self.board.width() / 2) as i32, (self.board.height() / 2) as i32)
        })
    }

    /// Update the direction, ignoring a turn straight back into the body
    fn steer(&mut self, key: Key) {
        if let Some(direction) = key.direction() {
            if !self.direction.is_opposite(direction) {
                self.direction = direction;
            }
        }
    }

    /// Put a fruit on a uniformly chosen empty cell, if there is one
    fn place_fruit(&mut self) -> Option<Position> {
        let pos = *self
            .board
            .positions_of(SnakeTile::Empty)
            .choose(&mut self.rng)?;
        self.board.set(pos, SnakeTile::Fruit);
        Some(pos)
    }

    #[cfg(test)]
    fn from_layout(segments: &[Position], direction: Direction, fruit: Option<Position>) -> Self {
        let mut board = Board::new(SnakeTile::Empty);
        for &segment in segments {
            board.set(segment, SnakeTile::Body);
        }
        if let Some(&head) = segments.last() {
            board.set(head, SnakeTile::Head);
        }
        if let Some(fruit) = fruit {
            board.set(fruit, SnakeTile::Fruit);
        }

        Self {
            board,
            segments: segments.iter().copied().collect(),
            direction,
            fruit,
            score: 0,
            rng: StdRng::seed_from_u64(7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_board_matches_segments(model: &SnakeModel) {
        let mut on_board: HashSet<Position> =
            model.board().positions_of(SnakeTile::Body).into_iter().collect();
        on_board.extend(model.board().positions_of(SnakeTile::Head));
        let listed: HashSet<Position> = model.segments().iter().copied().collect();

        assert_eq!(on_board, listed);
        assert_eq!(model.board().count(SnakeTile::Head), 1);
    }

    #[test]
    fn test_new_game() {
        let model = SnakeModel::with_seed(&GameConfig::default(), 3);
        let center = Position::new(5, 5);

        assert_eq!(model.score(), 0);
        assert_eq!(model.len(), 20);
        assert!(model.segments().iter().all(|&segment| segment == center));
        assert_eq!(model.direction(), Direction::North);
        assert_eq!(model.board().get(center), SnakeTile::Head);

        let fruit = model.fruit().unwrap();
        assert_ne!(fruit, center);
        assert_eq!(model.board().get(fruit), SnakeTile::Fruit);
        assert_eq!(model.board().count(SnakeTile::Fruit), 1);
    }

    #[test]
    fn test_stacked_snake_unrolls() {
        let config = GameConfig {
            snake_initial_length: 3,
            ..Default::default()
        };
        let mut model = SnakeModel::with_seed(&config, 11);
        // No fruit, so nothing on the path can make the snake grow.
        model.fruit = None;
        model.board.fill(SnakeTile::Empty);
        model.board.set(Position::new(5, 5), SnakeTile::Head);

        model.update(Key::Other).unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(model.board().get(Position::new(5, 5)), SnakeTile::Body);
        assert_eq!(model.board().get(Position::new(5, 4)), SnakeTile::Head);
        assert_board_matches_segments(&model);

        model.update(Key::Other).unwrap();
        assert_eq!(model.board().get(Position::new(5, 5)), SnakeTile::Body);
        assert_board_matches_segments(&model);

        model.update(Key::Other).unwrap();
        assert_eq!(model.board().get(Position::new(5, 5)), SnakeTile::Empty);
        assert_eq!(
            model.segments().iter().copied().collect::<Vec<_>>(),
            vec![Position::new(5, 4), Position::new(5, 3), Position::new(5, 2)]
        );
        assert_board_matches_segments(&model);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut model = SnakeModel::from_layout(
            &[Position::new(3, 5), Position::new(4, 5), Position::new(5, 5)],
            Direction::East,
            None,
        );

        model.update(Key::Left).unwrap();

        assert_eq!(model.direction(), Direction::East);
        assert_eq!(model.segments().back(), Some(&Position::new(6, 5)));
    }

    #[test]
    fn test_turn_and_other_key() {
        let mut model = SnakeModel::from_layout(
            &[Position::new(3, 5), Position::new(4, 5), Position::new(5, 5)],
            Direction::East,
            None,
        );

        model.update(Key::Down).unwrap();
        assert_eq!(model.direction(), Direction::South);

        model.update(Key::Other).unwrap();
        assert_eq!(model.direction(), Direction::South);
        assert_eq!(model.segments().back(), Some(&Position::new(5, 7)));
    }

    #[test]
    fn test_moving_without_fruit_keeps_length() {
        let mut model = SnakeModel::from_layout(
            &[Position::new(3, 5), Position::new(4, 5), Position::new(5, 5)],
            Direction::East,
            Some(Position::new(0, 0)),
        );

        model.update(Key::Other).unwrap();

        assert_eq!(model.len(), 3);
        assert_eq!(model.score(), 0);
        assert_eq!(model.board().get(Position::new(3, 5)), SnakeTile::Empty);
        assert_eq!(model.board().get(Position::new(5, 5)), SnakeTile::Body);
        assert_eq!(model.board().get(Position::new(6, 5)), SnakeTile::Head);
        assert_board_matches_segments(&model);
    }

    #[test]
    fn test_eating_fruit_grows_and_scores() {
        let mut model = SnakeModel::from_layout(
            &[Position::new(3, 5), Position::new(4, 5), Position::new(5, 5)],
            Direction::East,
            Some(Position::new(6, 5)),
        );

        model.update(Key::Other).unwrap();

        assert_eq!(model.score(), 1);
        assert_eq!(model.len(), 4);
        assert_eq!(model.board().get(Position::new(3, 5)), SnakeTile::Body);
        assert_eq!(model.board().get(Position::new(6, 5)), SnakeTile::Head);

        let fruit = model.fruit().unwrap();
        assert_eq!(model.board().get(fruit), SnakeTile::Fruit);
        assert_eq!(model.board().count(SnakeTile::Fruit), 1);
        assert_board_matches_segments(&model);
    }

    #[test]
    fn test_wall_collision() {
        let mut model = SnakeModel::from_layout(
            &[Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)],
            Direction::West,
            Some(Position::new(5, 5)),
        );
        model.score = 4;
        let board_before = model.board().clone();

        let result = model.update(Key::Other);

        assert_eq!(result, Err(GameOver { score: 4 }));
        assert_eq!(model.board(), &board_before);
    }

    #[test]
    fn test_self_collision() {
        // Head at (5,6) heading north into (5,5), which stays part of the body.
        let mut model = SnakeModel::from_layout(
            &[
                Position::new(4, 5),
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ],
            Direction::West,
            None,
        );

        let result = model.update(Key::Up);

        assert_eq!(result, Err(GameOver { score: 0 }));
    }

    #[test]
    fn test_chasing_tail_is_allowed() {
        // A closed 2x2 loop: the head moves into the cell the tail leaves.
        let mut model = SnakeModel::from_layout(
            &[
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ],
            Direction::West,
            None,
        );

        model.update(Key::Up).unwrap();

        assert_eq!(model.segments().back(), Some(&Position::new(5, 5)));
        assert_eq!(model.board().get(Position::new(5, 5)), SnakeTile::Head);
        assert_eq!(model.len(), 4);
        assert_board_matches_segments(&model);
    }

    #[test]
    fn test_filling_the_board_ends_game() {
        // Snake covers everything but the fruit cell at (0, 0).
        let mut segments = Vec::new();
        for y in (0..10).rev() {
            let row: Vec<i32> = if y % 2 == 1 {
                (0..10).collect()
            } else {
                (0..10).rev().collect()
            };
            for x in row {
                if (x, y) != (0, 0) {
                    segments.push(Position::new(x, y));
                }
            }
        }
        assert_eq!(segments.last(), Some(&Position::new(1, 0)));

        let mut model =
            SnakeModel::from_layout(&segments, Direction::West, Some(Position::new(0, 0)));
        model.score = 7;

        let result = model.update(Key::Other);

        assert_eq!(result, Err(GameOver { score: 7 }));
        assert_eq!(model.score(), 7);
    }

    #[test]
    fn test_circling_back_to_start_cell_is_allowed() {
        let mut model = SnakeModel::with_seed(&GameConfig::default(), 11);
        // No fruit, so the snake never grows on this path.
        model.fruit = None;
        model.board.fill(SnakeTile::Empty);
        model.board.set(Position::new(5, 5), SnakeTile::Head);

        for key in [Key::Up, Key::Right, Key::Down, Key::Left] {
            assert_eq!(model.update(key), Ok(()));
        }

        assert_eq!(model.segments().back(), Some(&Position::new(5, 5)));
        assert_eq!(model.board().get(Position::new(5, 5)), SnakeTile::Head);
        assert_eq!(model.len(), 20);
        assert_board_matches_segments(&model);
    }
}
