pub mod play;

pub use play::{PlayMode, TerminalInput, TerminalView};
