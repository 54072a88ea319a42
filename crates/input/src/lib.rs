//! Input handling: terminal key events to arcade actions.

pub mod map;

pub use map::{handle_key_event, should_quit};
