//! Render snapshots - plain data the UI layer draws from
//!
//! Controllers own their state; the rendering surface gets a copyable view
//! per frame and nothing else. Correct slots are only revealed once the
//! round is resolved.

use arrayvec::ArrayVec;

use crate::flash::{FlashPhase, FlashState};
use crate::glyphs::{GlyphPhase, GlyphState};
use crate::racer::RaceState;
use tui_lingo_types::{CHOICE_COUNT, FLASH_ROUND_MS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RacerSnapshot {
    pub phrase: &'static str,
    pub translation: &'static str,
    pub cursor: usize,
    pub errors: u32,
    pub total_typed: u32,
    pub wpm: u32,
    pub accuracy: u32,
    pub progress: f32,
    pub racing: bool,
    pub completed: bool,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashSnapshot {
    pub active: bool,
    pub revealing: bool,
    pub word: &'static str,
    pub choices: ArrayVec<&'static str, CHOICE_COUNT>,
    /// Set during reveal only
    pub correct_slot: Option<usize>,
    pub chosen_slot: Option<usize>,
    pub score: u32,
    pub streak: u32,
    pub remaining_ms: u32,
    /// Fraction of the round timer left, in [0.0, 1.0]
    pub timer_fraction: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSnapshot {
    pub active: bool,
    pub game_over: bool,
    pub revealing: bool,
    pub character: &'static str,
    pub prompt: &'static str,
    pub choices: ArrayVec<&'static str, CHOICE_COUNT>,
    /// Set during reveal only
    pub correct_slot: Option<usize>,
    pub chosen_slot: Option<usize>,
    pub score: u32,
    pub lives: u32,
}

impl RaceState {
    pub fn snapshot(&self) -> RacerSnapshot {
        let report = self.report();
        RacerSnapshot {
            phrase: self.phrase_text(),
            translation: self.translation(),
            cursor: report.cursor,
            errors: report.errors,
            total_typed: report.total_typed,
            wpm: report.wpm,
            accuracy: report.accuracy,
            progress: report.progress,
            racing: self.racing(),
            completed: self.completed(),
            score: report.score,
        }
    }
}

impl FlashState {
    pub fn snapshot(&self) -> FlashSnapshot {
        let revealing = self.phase() == FlashPhase::Reveal;
        let mut choices = ArrayVec::new();
        for slot in 0..self.choices().len() {
            if let Some(label) = self.choice_label(slot) {
                choices.push(label);
            }
        }

        FlashSnapshot {
            active: self.active(),
            revealing,
            word: if self.active() { self.word() } else { "" },
            choices,
            correct_slot: if revealing { self.correct_slot() } else { None },
            chosen_slot: self.chosen_slot(),
            score: self.score(),
            streak: self.streak(),
            remaining_ms: self.remaining_ms(),
            timer_fraction: self.remaining_ms() as f32 / FLASH_ROUND_MS as f32,
        }
    }
}

impl GlyphState {
    pub fn snapshot(&self) -> GlyphSnapshot {
        let revealing = self.phase() == GlyphPhase::Reveal;
        let mut choices = ArrayVec::new();
        for slot in 0..self.choices().len() {
            if let Some(label) = self.choice_label(slot) {
                choices.push(label);
            }
        }

        GlyphSnapshot {
            active: self.active(),
            game_over: self.game_over(),
            revealing,
            character: if self.active() { self.character() } else { "✕" },
            prompt: self.script().prompt(),
            choices,
            correct_slot: if revealing { self.correct_slot() } else { None },
            chosen_slot: self.chosen_slot(),
            score: self.score(),
            lives: self.lives(),
        }
    }
}

/// Hearts string for the lives counter: filled for remaining, hollow for lost
pub fn lives_hearts(lives: u32, max: u32) -> String {
    let lives = lives.min(max) as usize;
    let mut out = String::new();
    for _ in 0..lives {
        out.push('♥');
    }
    for _ in 0..(max as usize - lives) {
        out.push('♡');
    }
    out
}
