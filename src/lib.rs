//! Grid Arcade - a small engine for turn-based grid games
//!
//! This library provides:
//! - Game rules for Gold and Snake on a fixed 10x10 board (game module)
//! - A threaded tick loop with a queued input channel (control module)
//! - A terminal front end built on crossterm and ratatui (input, render and
//!   modes modules)

pub mod control;
pub mod error;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;

pub use error::{ArcadeError, ArcadeResult, GameOver};
