//! The game loop
//!
//! A [`GameLoop`] runs one game at a time on its own thread. Every tick it
//! takes at most one key from the [`InputQueue`], feeds it to the model and
//! asks the view to repaint, then sleeps for the tick interval. The loop ends
//! either when the model reports game over or when [`GameLoop::stop`] is
//! called from the control thread.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, error, info, trace};

use super::cancel::CancelToken;
use super::collaborators::{InputSource, SharedModel, View};
use super::input_queue::InputQueue;
use crate::error::{ArcadeError, ArcadeResult, GameOver};
use crate::game::{GameConfig, GameModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Never started
    Idle,
    Running,
    /// `stop` is waiting for the tick thread to exit
    Stopping,
    Stopped,
}

struct Worker {
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

pub struct GameLoop {
    view: Arc<dyn View>,
    input_source: Arc<dyn InputSource>,
    input: InputQueue,
    tick_interval: Duration,
    stop_poll_interval: Duration,
    state: Arc<Mutex<LoopState>>,
    worker: Option<Worker>,
}

impl GameLoop {
    pub fn new(
        view: Arc<dyn View>,
        input_source: Arc<dyn InputSource>,
        config: &GameConfig,
    ) -> Self {
        Self {
            view,
            input_source,
            input: InputQueue::new(),
            tick_interval: config.tick_interval(),
            stop_poll_interval: config.stop_poll_interval(),
            state: Arc::new(Mutex::new(LoopState::Idle)),
            worker: None,
        }
    }

    /// Start running `model` on a new tick thread.
    ///
    /// Fails with `ArcadeError::InvalidState` while a game is still running;
    /// call [`GameLoop::stop`] first. A game that ended by itself does not
    /// need to be stopped.
    pub fn start(&mut self, model: GameModel) -> ArcadeResult<SharedModel> {
        if self.state() == LoopState::Running {
            return Err(ArcadeError::InvalidState("game is already running"));
        }
        self.reap_finished_worker();

        let game = model.name();
        let model = Arc::new(RwLock::new(model));

        self.input_source.attach(self.input.clone());
        self.view.set_model(Some(model.clone()));
        self.set_state(LoopState::Running);

        let cancel = CancelToken::new();
        let ticker = Ticker {
            model: model.clone(),
            view: self.view.clone(),
            input: self.input.clone(),
            cancel: cancel.clone(),
            interval: self.tick_interval,
            state: self.state.clone(),
        };

        let handle = match thread::Builder::new()
            .name("game-loop".to_string())
            .spawn(move || ticker.run())
        {
            Ok(handle) => handle,
            Err(err) => {
                self.input_source.detach();
                self.view.set_model(None);
                self.set_state(LoopState::Stopped);
                return Err(err.into());
            }
        };

        self.worker = Some(Worker { cancel, handle });
        info!(game, interval_ms = self.tick_interval.as_millis() as u64, "game loop started");

        Ok(model)
    }

    /// Stop the running game, if any, and wait for the tick thread to exit.
    ///
    /// Blocks for as long as the current tick takes; there is no timeout.
    /// Calling it on a loop that is not running does nothing.
    pub fn stop(&mut self) {
        self.input_source.detach();

        let Some(worker) = self.worker.take() else {
            return;
        };

        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if *state == LoopState::Running {
                *state = LoopState::Stopping;
            }
        }
        self.view.set_model(None);
        worker.cancel.cancel();

        while !worker.handle.is_finished() {
            thread::sleep(self.stop_poll_interval);
        }
        if worker.handle.join().is_err() {
            error!("game loop thread panicked");
        }

        self.set_state(LoopState::Stopped);
        info!("game loop stopped");
    }

    pub fn state(&self) -> LoopState {
        let state = *self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &self.worker {
            // A tick thread that died without reporting back.
            Some(worker) if state == LoopState::Running && worker.handle.is_finished() => {
                LoopState::Stopped
            }
            _ => state,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// Producer side of the loop's input queue
    pub fn input(&self) -> &InputQueue {
        &self.input
    }

    fn set_state(&self, state: LoopState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn reap_finished_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.handle.join().is_err() {
                error!("game loop thread panicked");
            }
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// State moved onto the tick thread
struct Ticker {
    model: SharedModel,
    view: Arc<dyn View>,
    input: InputQueue,
    cancel: CancelToken,
    interval: Duration,
    state: Arc<Mutex<LoopState>>,
}

impl Ticker {
    fn run(self) {
        while !self.cancel.is_cancelled() {
            let key = self.input.dequeue_or_default();
            trace!(?key, "tick");

            let outcome = self
                .model
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .update(key);

            if let Err(GameOver { score }) = outcome {
                self.view.set_model(None);
                *self.state.lock().unwrap_or_else(PoisonError::into_inner) = LoopState::Stopped;
                // The final score is only logged.
                info!(score, "game over");
                return;
            }

            self.view.repaint();

            if self.cancel.sleep(self.interval) {
                break;
            }
        }

        debug!("tick thread stopped on request");
    }
}
