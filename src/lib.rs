//! tui-lingo (workspace facade crate).
//!
//! This package keeps the public `tui_lingo::{core,engine,chat,input,term,types}`
//! API in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_lingo_chat as chat;
pub use tui_lingo_core as core;
pub use tui_lingo_engine as engine;
pub use tui_lingo_input as input;
pub use tui_lingo_term as term;
pub use tui_lingo_types as types;
