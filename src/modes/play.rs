use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::info;

use crate::control::{
    ArcadeFactory, GameFactory, GameLoop, InputQueue, InputSource, SharedModel, View,
};
use crate::game::Key;
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// View backed by the terminal: remembers the model to draw and wakes the
/// UI task whenever the loop asks for a repaint.
pub struct TerminalView {
    model: Mutex<Option<SharedModel>>,
    repaint_tx: UnboundedSender<()>,
}

impl TerminalView {
    pub fn new(repaint_tx: UnboundedSender<()>) -> Self {
        Self {
            model: Mutex::new(None),
            repaint_tx,
        }
    }

    pub fn model(&self) -> Option<SharedModel> {
        self.model
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl View for TerminalView {
    fn set_model(&self, model: Option<SharedModel>) {
        *self.model.lock().unwrap_or_else(PoisonError::into_inner) = model;
        self.repaint();
    }

    fn repaint(&self) {
        // The UI task is gone once the app is shutting down.
        let _ = self.repaint_tx.send(());
    }
}

/// Forwards terminal key presses to the loop while a game is attached
#[derive(Default)]
pub struct TerminalInput {
    queue: Mutex<Option<InputQueue>>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass a key on to the attached game; dropped when none is attached
    pub fn deliver(&self, key: Key) {
        if let Some(queue) = &*self.queue.lock().unwrap_or_else(PoisonError::into_inner) {
            queue.enqueue(key);
        }
    }
}

impl InputSource for TerminalInput {
    fn attach(&self, queue: InputQueue) {
        *self.queue.lock().unwrap_or_else(PoisonError::into_inner) = Some(queue);
    }

    fn detach(&self) {
        *self.queue.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Interactive play in the terminal
pub struct PlayMode {
    factory: ArcadeFactory,
    game_loop: GameLoop,
    view: Arc<TerminalView>,
    input: Arc<TerminalInput>,
    repaint_rx: UnboundedReceiver<()>,
    renderer: Renderer,
    input_handler: InputHandler,
    selected: &'static str,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(factory: ArcadeFactory, game: &'static str) -> Self {
        let (repaint_tx, repaint_rx) = unbounded_channel();
        let view = Arc::new(TerminalView::new(repaint_tx));
        let input = Arc::new(TerminalInput::new());
        let game_loop = GameLoop::new(view.clone(), input.clone(), factory.config());

        Self {
            factory,
            game_loop,
            view,
            input,
            repaint_rx,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            selected: game,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_ui_loop(&mut terminal).await;

        tokio::task::block_in_place(|| self.game_loop.stop());
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_ui_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        self.start_game(self.selected)?;
        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Repaint requested by the game loop
                Some(()) = self.repaint_rx.recv() => {
                    // Several requests may have piled up; one frame covers them all.
                    while self.repaint_rx.try_recv().is_ok() {}
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(key) => self.input.deliver(key),
                KeyAction::Start(game) => self.start_game(game)?,
                KeyAction::Restart => self.start_game(self.selected)?,
                KeyAction::Quit => self.should_quit = true,
            }
        }

        Ok(())
    }

    /// Replace whatever is running with a fresh game
    fn start_game(&mut self, game: &'static str) -> Result<()> {
        tokio::task::block_in_place(|| self.game_loop.stop());

        let model = self
            .factory
            .create_game(game)
            .with_context(|| format!("Failed to create game {game}"))?;
        self.game_loop
            .start(model)
            .context("Failed to start game loop")?;

        self.selected = game;
        info!(game, "started game from terminal");
        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let model = self.view.model();
        let guard = model
            .as_ref()
            .map(|model| model.read().unwrap_or_else(PoisonError::into_inner));

        terminal
            .draw(|frame| self.renderer.render(frame, self.selected, guard.as_deref()))
            .context("Failed to draw frame")?;

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
