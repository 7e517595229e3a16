use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the games and the loop that drives them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Time between two ticks of the game loop
    pub tick_interval_ms: u64,
    /// How often `GameLoop::stop` checks whether the tick thread has exited
    pub stop_poll_interval_ms: u64,
    /// Number of coins on the board when a Gold game starts
    pub gold_coin_count: usize,
    /// Number of segments the snake starts with
    pub snake_initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 150,
            stop_poll_interval_ms: 100,
            gold_coin_count: 20,
            snake_initial_length: 20,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom tick interval
    pub fn with_tick_interval_ms(tick_interval_ms: u64) -> Self {
        Self {
            tick_interval_ms,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn stop_poll_interval(&self) -> Duration {
        Duration::from_millis(self.stop_poll_interval_ms)
    }
}
