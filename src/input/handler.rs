use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::control::ArcadeFactory;
use crate::game::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A key for the running game; unrecognized keys arrive as `Key::Other`
    Game(Key),
    /// Start the named game, replacing the current one
    Start(&'static str),
    /// Start the last selected game again
    Restart,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Key::Up),
            KeyCode::Down => KeyAction::Game(Key::Down),
            KeyCode::Left => KeyAction::Game(Key::Left),
            KeyCode::Right => KeyAction::Game(Key::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(Key::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Game(Key::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Game(Key::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Game(Key::Right),

            // Game selection
            KeyCode::Char('1') => KeyAction::Start(ArcadeFactory::GOLD),
            KeyCode::Char('2') => KeyAction::Start(ArcadeFactory::SNAKE),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::Game(Key::Other),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Up)), KeyAction::Game(Key::Up));
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Game(Key::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Game(Key::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Game(Key::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Game(Key::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Game(Key::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            KeyAction::Game(Key::Down)
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(d_upper), KeyAction::Game(Key::Right));
    }

    #[test]
    fn test_game_selection_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('1'))),
            KeyAction::Start("Gold")
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('2'))),
            KeyAction::Start("Snake")
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::Restart
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key_reaches_game() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            KeyAction::Game(Key::Other)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Enter)),
            KeyAction::Game(Key::Other)
        );
    }
}
