use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::game::Key;

/// FIFO of key presses that have not reached the game yet.
///
/// Cloning gives another handle onto the same queue: the input source keeps
/// one to push from its own thread, the loop thread pops from another. The
/// lock is only held for a single push or pop.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    keys: Arc<Mutex<VecDeque<Key>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key press to the end of the queue
    pub fn enqueue(&self, key: Key) {
        self.lock().push_back(key);
    }

    /// Take the oldest key press, or `Key::Other` if there is none
    pub fn dequeue_or_default(&self) -> Key {
        self.lock().pop_front().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every pending key press
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Key>> {
        // A VecDeque of Copy keys cannot be left half-updated by a panic.
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
