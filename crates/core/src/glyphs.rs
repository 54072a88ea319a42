//! Glyph Match - lives-based glyph identification, untimed rounds
//!
//! Four candidate readings per glyph, chosen and checked by pool index.
//! Wrong answers cost a life; at zero lives the session is over until an
//! explicit restart. The only timers are the short reveal delays between
//! rounds, owned by the current phase like the other games.

use arrayvec::ArrayVec;

use crate::content;
use crate::rng::{build_choices, SimpleRng};
use tui_lingo_types::{
    GlyphEntry, ScriptCode, CHOICE_COUNT, GLYPH_CORRECT_ADVANCE_MS, GLYPH_GAME_OVER_MS,
    GLYPH_POINTS, GLYPH_WRONG_ADVANCE_MS, START_LIVES,
};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphPhase {
    Idle,
    /// A round is live, waiting for an answer
    Awaiting,
    /// Answer revealed; next round (or game over) follows the delay
    Reveal,
    /// Terminal until `start()` is called again
    GameOver,
}

/// What an answer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphOutcome {
    Correct { gained: u32 },
    Wrong {
        correct_slot: usize,
        lives_left: u32,
        game_over: bool,
    },
}

/// One live Glyph Match session
#[derive(Debug, Clone)]
pub struct GlyphState {
    script: ScriptCode,
    rng: SimpleRng,
    score: u32,
    lives: u32,
    phase: GlyphPhase,
    pool: &'static [GlyphEntry],
    /// Pool index of the correct entry for the live round
    current: usize,
    /// Pool indices, one per choice slot
    choices: ArrayVec<usize, CHOICE_COUNT>,
    chosen_slot: Option<usize>,
    advance_timer_ms: u32,
    /// The pending reveal ends the session instead of starting a round
    ending: bool,
    round_id: u32,
}

impl GlyphState {
    pub fn new(script: ScriptCode, seed: u32) -> Self {
        Self {
            script,
            rng: SimpleRng::new(seed),
            score: 0,
            lives: START_LIVES,
            phase: GlyphPhase::Idle,
            pool: content::glyphs(script),
            current: 0,
            choices: ArrayVec::new(),
            chosen_slot: None,
            advance_timer_ms: 0,
            ending: false,
            round_id: 0,
        }
    }

    /// Start a fresh session: score 0, full lives, first round begins.
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.ending = false;
        self.begin_round();
    }

    /// Select the glyph pool; takes effect from the next round.
    pub fn set_script(&mut self, script: ScriptCode) {
        self.script = script;
    }

    fn begin_round(&mut self) {
        if self.lives == 0 {
            return;
        }
        self.pool = content::glyphs(self.script);
        self.current = self.rng.pick_index(self.pool);
        self.choices = build_choices(&mut self.rng, self.pool.len(), self.current);
        self.chosen_slot = None;
        self.advance_timer_ms = 0;
        self.phase = GlyphPhase::Awaiting;
        self.round_id = self.round_id.wrapping_add(1);
    }

    /// Answer the live round by choice slot.
    /// Ignored outside `Awaiting` or for an out-of-range slot.
    pub fn answer(&mut self, slot: usize) -> Option<GlyphOutcome> {
        if self.phase != GlyphPhase::Awaiting || slot >= self.choices.len() {
            return None;
        }

        self.chosen_slot = Some(slot);
        self.phase = GlyphPhase::Reveal;

        if self.choices[slot] == self.current {
            self.score += GLYPH_POINTS;
            self.advance_timer_ms = GLYPH_CORRECT_ADVANCE_MS;
            Some(GlyphOutcome::Correct { gained: GLYPH_POINTS })
        } else {
            self.lives = self.lives.saturating_sub(1);
            let game_over = self.lives == 0;
            if game_over {
                self.ending = true;
                self.advance_timer_ms = GLYPH_GAME_OVER_MS;
            } else {
                self.advance_timer_ms = GLYPH_WRONG_ADVANCE_MS;
            }
            Some(GlyphOutcome::Wrong {
                correct_slot: self.correct_slot().unwrap_or(0),
                lives_left: self.lives,
                game_over,
            })
        }
    }

    /// Advance the reveal delay; at expiry the next round begins, or the
    /// session settles into its terminal state.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != GlyphPhase::Reveal {
            return;
        }
        self.advance_timer_ms = self.advance_timer_ms.saturating_sub(elapsed_ms);
        if self.advance_timer_ms == 0 {
            if self.ending {
                self.phase = GlyphPhase::GameOver;
            } else {
                self.begin_round();
            }
        }
    }

    pub fn phase(&self) -> GlyphPhase {
        self.phase
    }

    pub fn active(&self) -> bool {
        matches!(self.phase, GlyphPhase::Awaiting | GlyphPhase::Reveal)
    }

    pub fn game_over(&self) -> bool {
        self.phase == GlyphPhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Monotonic round counter (increments every `begin_round`)
    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn script(&self) -> ScriptCode {
        self.script
    }

    /// The glyph being quizzed
    pub fn character(&self) -> &'static str {
        self.pool[self.current].character
    }

    /// Pool indices per choice slot
    pub fn choices(&self) -> &[usize] {
        &self.choices
    }

    /// Reading label for a choice slot
    pub fn choice_label(&self, slot: usize) -> Option<&'static str> {
        self.choices.get(slot).map(|&i| self.pool[i].answer)
    }

    /// Slot holding the correct entry
    pub fn correct_slot(&self) -> Option<usize> {
        self.choices.iter().position(|&i| i == self.current)
    }

    /// Slot the player picked, during reveal
    pub fn chosen_slot(&self) -> Option<usize> {
        self.chosen_slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GlyphState {
        let mut state = GlyphState::new(ScriptCode::Ja, 12345);
        state.start();
        state
    }

    fn wrong_slot(state: &GlyphState) -> usize {
        let correct = state.correct_slot().unwrap();
        (correct + 1) % state.choices().len()
    }

    #[test]
    fn test_start_resets_and_begins_round() {
        let state = started();
        assert_eq!(state.phase(), GlyphPhase::Awaiting);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lives(), START_LIVES);
        assert_eq!(state.choices().len(), CHOICE_COUNT);
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let mut state = started();
        let round = state.round_id();
        let slot = state.correct_slot().unwrap();

        let outcome = state.answer(slot).unwrap();
        assert_eq!(outcome, GlyphOutcome::Correct { gained: GLYPH_POINTS });
        assert_eq!(state.score(), GLYPH_POINTS);
        assert_eq!(state.lives(), START_LIVES);
        assert_eq!(state.phase(), GlyphPhase::Reveal);

        state.tick(GLYPH_CORRECT_ADVANCE_MS);
        assert_eq!(state.phase(), GlyphPhase::Awaiting);
        assert_eq!(state.round_id(), round + 1);
    }

    #[test]
    fn test_wrong_answer_costs_a_life() {
        let mut state = started();
        let correct = state.correct_slot().unwrap();
        let outcome = state.answer(wrong_slot(&state)).unwrap();

        assert_eq!(
            outcome,
            GlyphOutcome::Wrong {
                correct_slot: correct,
                lives_left: START_LIVES - 1,
                game_over: false,
            }
        );
        assert_eq!(state.score(), 0);

        state.tick(GLYPH_WRONG_ADVANCE_MS);
        assert_eq!(state.phase(), GlyphPhase::Awaiting);
    }

    #[test]
    fn test_three_wrong_answers_end_the_session() {
        let mut state = started();

        for _ in 0..2 {
            state.answer(wrong_slot(&state)).unwrap();
            state.tick(GLYPH_WRONG_ADVANCE_MS);
        }
        assert_eq!(state.lives(), 1);

        let outcome = state.answer(wrong_slot(&state)).unwrap();
        match outcome {
            GlyphOutcome::Wrong {
                lives_left, game_over, ..
            } => {
                assert_eq!(lives_left, 0);
                assert!(game_over);
            }
            other => panic!("expected Wrong, got {:?}", other),
        }

        // Terminal after the reveal delay; no further round begins.
        let round = state.round_id();
        state.tick(GLYPH_GAME_OVER_MS);
        assert_eq!(state.phase(), GlyphPhase::GameOver);
        assert!(!state.active());
        assert_eq!(state.round_id(), round);

        state.tick(10_000);
        assert!(state.answer(0).is_none());
        assert_eq!(state.phase(), GlyphPhase::GameOver);
        assert_eq!(state.lives(), 0);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = started();
        for _ in 0..3 {
            state.answer(wrong_slot(&state)).unwrap();
            state.tick(GLYPH_GAME_OVER_MS.max(GLYPH_WRONG_ADVANCE_MS));
        }
        assert_eq!(state.phase(), GlyphPhase::GameOver);

        state.start();
        assert_eq!(state.phase(), GlyphPhase::Awaiting);
        assert_eq!(state.lives(), START_LIVES);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_answer_ignored_during_reveal() {
        let mut state = started();
        let slot = state.correct_slot().unwrap();
        state.answer(slot).unwrap();
        assert!(state.answer(slot).is_none());
        assert_eq!(state.score(), GLYPH_POINTS);
    }

    #[test]
    fn test_correct_entry_appears_exactly_once() {
        let mut state = started();
        for _ in 0..30 {
            let correct_idx = state.current;
            assert_eq!(
                state.choices().iter().filter(|&&i| i == correct_idx).count(),
                1
            );

            let mut sorted: Vec<usize> = state.choices().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), CHOICE_COUNT);

            let slot = state.correct_slot().unwrap();
            state.answer(slot).unwrap();
            state.tick(GLYPH_CORRECT_ADVANCE_MS);
        }
    }

    #[test]
    fn test_script_change_applies_next_round() {
        let mut state = started();
        state.set_script(ScriptCode::Gr);
        // Current round still shows the old pool
        assert_eq!(state.pool, content::glyphs(ScriptCode::Ja));

        let slot = state.correct_slot().unwrap();
        state.answer(slot).unwrap();
        state.tick(GLYPH_CORRECT_ADVANCE_MS);
        assert_eq!(state.pool, content::glyphs(ScriptCode::Gr));
        assert_eq!(state.script(), ScriptCode::Gr);
    }
}
