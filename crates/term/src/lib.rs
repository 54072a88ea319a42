//! Terminal front-end: renderer and per-game views.

pub mod game_view;
pub mod renderer;

pub use game_view::{FrameInput, GameView, Line, Span, Tone};
pub use renderer::TerminalRenderer;
