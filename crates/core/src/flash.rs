//! Word Flash - timed multiple-choice vocabulary rounds with streak scoring
//!
//! Each round shows a word and four meanings: the correct entry plus three
//! distractors drawn without replacement from the rest of the pool.
//! Correctness is decided by pool index, never by the rendered meaning
//! string, so entries sharing a meaning cannot be confused.
//!
//! The round timeout and the between-round delay are countdowns owned by
//! the current phase; beginning a round replaces them, so a superseded
//! round's timer can never fire.

use arrayvec::ArrayVec;

use crate::content;
use crate::rng::{build_choices, SimpleRng};
use tui_lingo_types::{
    LanguageCode, VocabEntry, CHOICE_COUNT, FLASH_ADVANCE_MS, FLASH_BASE_POINTS, FLASH_ROUND_MS,
    FLASH_STREAK_BONUS,
};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Idle,
    /// A round is live and the 7 s timer is running
    Awaiting,
    /// The answer is revealed; the next round begins when the delay expires
    Reveal,
}

/// What an answer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashOutcome {
    Correct { gained: u32 },
    /// Wrong choice; `correct_slot` is the slot to highlight
    Wrong { correct_slot: usize },
}

/// One live Word Flash session
#[derive(Debug, Clone)]
pub struct FlashState {
    lang: LanguageCode,
    rng: SimpleRng,
    score: u32,
    streak: u32,
    phase: FlashPhase,
    pool: &'static [VocabEntry],
    /// Pool index of the correct entry for the live round
    current: usize,
    /// Pool indices, one per choice slot
    choices: ArrayVec<usize, CHOICE_COUNT>,
    /// Slot the player picked (reveal phase only)
    chosen_slot: Option<usize>,
    round_timer_ms: u32,
    advance_timer_ms: u32,
    round_id: u32,
}

impl FlashState {
    pub fn new(lang: LanguageCode, seed: u32) -> Self {
        Self {
            lang,
            rng: SimpleRng::new(seed),
            score: 0,
            streak: 0,
            phase: FlashPhase::Idle,
            pool: content::vocab(lang),
            current: 0,
            choices: ArrayVec::new(),
            chosen_slot: None,
            round_timer_ms: 0,
            advance_timer_ms: 0,
            round_id: 0,
        }
    }

    /// Start a fresh session: score and streak reset, first round begins.
    pub fn start(&mut self) {
        self.score = 0;
        self.streak = 0;
        self.begin_round();
    }

    /// Deactivate; no further rounds begin.
    pub fn stop(&mut self) {
        self.phase = FlashPhase::Idle;
        self.chosen_slot = None;
        self.round_timer_ms = 0;
        self.advance_timer_ms = 0;
    }

    /// Select the vocabulary pool; takes effect from the next round.
    pub fn set_language(&mut self, lang: LanguageCode) {
        self.lang = lang;
    }

    fn begin_round(&mut self) {
        self.pool = content::vocab(self.lang);
        self.current = self.rng.pick_index(self.pool);
        self.choices = build_choices(&mut self.rng, self.pool.len(), self.current);
        self.chosen_slot = None;
        self.round_timer_ms = FLASH_ROUND_MS;
        self.advance_timer_ms = 0;
        self.phase = FlashPhase::Awaiting;
        self.round_id = self.round_id.wrapping_add(1);
    }

    /// Answer the live round by choice slot. Disarms the round timer.
    /// Ignored outside `Awaiting` or for an out-of-range slot.
    pub fn answer(&mut self, slot: usize) -> Option<FlashOutcome> {
        if self.phase != FlashPhase::Awaiting || slot >= self.choices.len() {
            return None;
        }

        self.chosen_slot = Some(slot);
        self.phase = FlashPhase::Reveal;
        self.advance_timer_ms = FLASH_ADVANCE_MS;
        self.round_timer_ms = 0;

        if self.choices[slot] == self.current {
            let gained = FLASH_BASE_POINTS + self.streak * FLASH_STREAK_BONUS;
            self.score += gained;
            self.streak += 1;
            Some(FlashOutcome::Correct { gained })
        } else {
            self.streak = 0;
            Some(FlashOutcome::Wrong {
                correct_slot: self.correct_slot().unwrap_or(0),
            })
        }
    }

    /// Advance timers. A round timeout resets the streak and begins the
    /// next round immediately; the reveal delay begins it when it expires.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.phase {
            FlashPhase::Idle => {}
            FlashPhase::Awaiting => {
                self.round_timer_ms = self.round_timer_ms.saturating_sub(elapsed_ms);
                if self.round_timer_ms == 0 {
                    self.streak = 0;
                    self.begin_round();
                }
            }
            FlashPhase::Reveal => {
                self.advance_timer_ms = self.advance_timer_ms.saturating_sub(elapsed_ms);
                if self.advance_timer_ms == 0 {
                    self.begin_round();
                }
            }
        }
    }

    pub fn phase(&self) -> FlashPhase {
        self.phase
    }

    pub fn active(&self) -> bool {
        self.phase != FlashPhase::Idle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Milliseconds left on the live round's timer
    pub fn remaining_ms(&self) -> u32 {
        self.round_timer_ms
    }

    /// Monotonic round counter (increments every `begin_round`)
    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn language(&self) -> LanguageCode {
        self.lang
    }

    /// The word being quizzed
    pub fn word(&self) -> &'static str {
        self.pool[self.current].word
    }

    /// Pool indices per choice slot
    pub fn choices(&self) -> &[usize] {
        &self.choices
    }

    /// Meaning label for a choice slot
    pub fn choice_label(&self, slot: usize) -> Option<&'static str> {
        self.choices.get(slot).map(|&i| self.pool[i].meaning)
    }

    /// Slot holding the correct entry
    pub fn correct_slot(&self) -> Option<usize> {
        self.choices.iter().position(|&i| i == self.current)
    }

    /// Slot the player picked, during reveal
    pub fn chosen_slot(&self) -> Option<usize> {
        self.chosen_slot
    }

    #[cfg(test)]
    pub(crate) fn force_round(&mut self, current: usize, choices: &[usize]) {
        self.current = current;
        self.choices = choices.iter().copied().collect();
        self.chosen_slot = None;
        self.phase = FlashPhase::Awaiting;
        self.round_timer_ms = FLASH_ROUND_MS;
    }
}
