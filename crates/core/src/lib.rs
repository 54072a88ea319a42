//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the content tables, random selection, and the three
//! mini-game state machines. It has **zero dependencies** on UI, networking,
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Testable**: Timers are driven by the caller, so tests own the clock
//! - **Portable**: Can run behind any front-end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`content`]: static phrase/vocabulary/glyph tables per language
//! - [`rng`]: seeded LCG, shuffle/sample helpers, choice-list construction
//! - [`racer`]: Type Racer - typing accuracy/speed against a phrase
//! - [`flash`]: Word Flash - timed multiple choice with streak scoring
//! - [`glyphs`]: Glyph Match - lives-based glyph identification
//! - [`snapshot`]: plain render views consumed by the UI layer
//!
//! # Timing
//!
//! The sessions hold countdown timers and advance them via
//! `tick(elapsed_ms)` from the driver's fixed-timestep loop. There are no
//! wall-clock reads anywhere in this crate; each deferred action (round
//! timeout, reveal delay) is the single countdown owned by the current
//! round, so a superseded round's timer can never fire.
//!
//! # Example
//!
//! ```
//! use tui_lingo_core::flash::{FlashOutcome, FlashState};
//! use tui_lingo_types::LanguageCode;
//!
//! let mut game = FlashState::new(LanguageCode::Es, 12345);
//! game.start();
//!
//! let slot = game.correct_slot().unwrap();
//! assert!(matches!(game.answer(slot), Some(FlashOutcome::Correct { .. })));
//! assert_eq!(game.streak(), 1);
//! ```

pub mod content;
pub mod flash;
pub mod glyphs;
pub mod racer;
pub mod rng;
pub mod snapshot;

pub use tui_lingo_types as types;

// Re-export commonly used types for convenience
pub use flash::{FlashOutcome, FlashPhase, FlashState};
pub use glyphs::{GlyphOutcome, GlyphPhase, GlyphState};
pub use racer::{RaceReport, RaceState};
pub use rng::{build_choices, sample, shuffled, SimpleRng};
pub use snapshot::{FlashSnapshot, GlyphSnapshot, RacerSnapshot};
