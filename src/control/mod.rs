//! Running games: the tick loop, its input queue and the interfaces it uses
//! to talk to a front end.

pub mod cancel;
pub mod collaborators;
pub mod factory;
pub mod game_loop;
pub mod input_queue;

pub use cancel::CancelToken;
pub use collaborators::{InputSource, SharedModel, View};
pub use factory::{ArcadeFactory, GameFactory};
pub use game_loop::{GameLoop, LoopState};
pub use input_queue::InputQueue;
