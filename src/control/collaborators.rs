//! Interfaces between the loop and the outside world

use std::sync::{Arc, RwLock};

use super::input_queue::InputQueue;
use crate::game::GameModel;

/// A model shared between the loop thread, which updates it, and the view,
/// which reads it between ticks.
pub type SharedModel = Arc<RwLock<GameModel>>;

/// Presentation side of a game.
///
/// Calls come from the loop thread as well as the control thread, so
/// implementations must be callable from anywhere.
pub trait View: Send + Sync {
    /// Show `model`, or nothing when `None`
    fn set_model(&self, model: Option<SharedModel>);

    /// Ask for the current model to be drawn again
    fn repaint(&self);
}

/// Something that produces key presses, e.g. a terminal or a window.
///
/// While attached it pushes every key it sees into the queue; once detached
/// it must stop doing so.
pub trait InputSource: Send + Sync {
    fn attach(&self, queue: InputQueue);

    fn detach(&self);
}
