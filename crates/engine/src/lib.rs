//! Arcade orchestration over the game cores.
//!
//! The cores ignore invalid events silently; this layer additionally
//! reports *why* an event did nothing, for drivers that want to surface it.

pub mod arcade;

pub use tui_lingo_core as core;
pub use tui_lingo_types as types;

pub use arcade::{AnswerError, AnswerFeedback, Arcade};
