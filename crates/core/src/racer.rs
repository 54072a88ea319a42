//! Type Racer - typing speed and accuracy against a target phrase
//!
//! The session compares the full typed string against the target on every
//! input event. Credit is a strict prefix: one wrong character blocks all
//! further "correct" progress until it is fixed, even if later characters
//! happen to line up. WPM counts the correct prefix only; accuracy counts
//! every typed character. Score accumulates across phrases within a sitting.

use crate::content;
use crate::rng::SimpleRng;
use tui_lingo_types::{
    LanguageCode, PhraseEntry, CHARS_PER_WORD, RACER_BONUS_CAP, RACER_ERROR_PENALTY,
};

/// Per-input result: everything the UI needs to reflect a keystroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceReport {
    /// Length of the longest exactly-matching prefix (chars)
    pub cursor: usize,
    /// Mismatched positions over the overlapping range
    pub errors: u32,
    /// Total characters typed
    pub total_typed: u32,
    pub wpm: u32,
    /// Percentage in [0, 100]; 100 while nothing is typed
    pub accuracy: u32,
    /// cursor / phrase length, in [0.0, 1.0]
    pub progress: f32,
    pub completed: bool,
    /// Cumulative score across phrases
    pub score: u32,
}

/// One live Type Racer session
#[derive(Debug, Clone)]
pub struct RaceState {
    lang: LanguageCode,
    rng: SimpleRng,
    phrase: PhraseEntry,
    target: Vec<char>,
    cursor: usize,
    errors: u32,
    total_typed: u32,
    elapsed_ms: u32,
    clock_latched: bool,
    racing: bool,
    completed: bool,
    final_wpm: u32,
    score: u32,
}

impl RaceState {
    /// Create a session with the given RNG seed; a phrase is pre-selected
    /// for display but the race does not begin until `start()`.
    pub fn new(lang: LanguageCode, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let pool = content::phrases(lang);
        let phrase = pool[rng.pick_index(pool)];

        Self {
            lang,
            rng,
            phrase,
            target: phrase.text.chars().collect(),
            cursor: 0,
            errors: 0,
            total_typed: 0,
            elapsed_ms: 0,
            clock_latched: false,
            racing: false,
            completed: false,
            final_wpm: 0,
            score: 0,
        }
    }

    /// Begin a race on a freshly selected phrase.
    ///
    /// Resets everything except the cumulative score, which persists
    /// across phrases for the lifetime of the session.
    pub fn start(&mut self) {
        let pool = content::phrases(self.lang);
        self.phrase = pool[self.rng.pick_index(pool)];
        self.target = self.phrase.text.chars().collect();
        self.cursor = 0;
        self.errors = 0;
        self.total_typed = 0;
        self.elapsed_ms = 0;
        self.clock_latched = false;
        self.racing = true;
        self.completed = false;
        self.final_wpm = 0;
    }

    /// Advance to the next phrase after completing one. No-op otherwise.
    pub fn next_phrase(&mut self) {
        if self.completed {
            self.start();
        }
    }

    /// Select the phrase pool; takes effect from the next `start()`.
    pub fn set_language(&mut self, lang: LanguageCode) {
        self.lang = lang;
    }

    /// Advance the race clock. Time accumulates only while racing and only
    /// once the first keystroke has latched the clock.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.racing && self.clock_latched {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        }
    }

    /// Process the full current typed string. Ignored unless racing.
    pub fn on_input(&mut self, typed: &str) -> Option<RaceReport> {
        if !self.racing {
            return None;
        }

        // First keystroke starts the clock
        if !self.clock_latched {
            self.clock_latched = true;
        }

        let mut total: u32 = 0;
        let mut errors: u32 = 0;
        let mut cursor: usize = 0;
        let mut prefix_intact = true;

        for (i, ch) in typed.chars().enumerate() {
            total += 1;
            match self.target.get(i) {
                Some(&want) if want == ch => {
                    if prefix_intact {
                        cursor += 1;
                    }
                }
                Some(_) => {
                    errors += 1;
                    prefix_intact = false;
                }
                // Typed past the end of the phrase: outside the
                // overlapping range, so no error is charged.
                None => {
                    prefix_intact = false;
                }
            }
        }

        self.total_typed = total;
        self.errors = errors;
        self.cursor = cursor;

        if cursor >= self.target.len() {
            self.completed = true;
            self.racing = false;
            self.final_wpm = self.live_wpm();
            let bonus = RACER_BONUS_CAP.saturating_sub(self.errors * RACER_ERROR_PENALTY);
            self.score += self.final_wpm + bonus;
        }

        Some(self.report())
    }

    /// Current figures, frozen once the phrase is completed.
    pub fn report(&self) -> RaceReport {
        RaceReport {
            cursor: self.cursor,
            errors: self.errors,
            total_typed: self.total_typed,
            wpm: self.wpm(),
            accuracy: self.accuracy(),
            progress: self.progress(),
            completed: self.completed,
            score: self.score,
        }
    }

    fn live_wpm(&self) -> u32 {
        if self.elapsed_ms == 0 {
            return 0;
        }
        let minutes = f64::from(self.elapsed_ms) / 60_000.0;
        let words = f64::from(self.cursor as u32) / f64::from(CHARS_PER_WORD);
        (words / minutes).round() as u32
    }

    /// Words per minute over the correct prefix; 0 while no time has passed
    pub fn wpm(&self) -> u32 {
        if self.completed {
            self.final_wpm
        } else {
            self.live_wpm()
        }
    }

    /// Share of typed characters that were correct, in [0, 100]
    pub fn accuracy(&self) -> u32 {
        if self.total_typed == 0 {
            return 100;
        }
        let good = f64::from(self.total_typed - self.errors);
        (good / f64::from(self.total_typed) * 100.0).round() as u32
    }

    /// Fraction of the phrase correctly typed so far
    pub fn progress(&self) -> f32 {
        if self.target.is_empty() {
            return 0.0;
        }
        self.cursor as f32 / self.target.len() as f32
    }

    pub fn racing(&self) -> bool {
        self.racing
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn language(&self) -> LanguageCode {
        self.lang
    }

    pub fn phrase_text(&self) -> &'static str {
        self.phrase.text
    }

    pub fn translation(&self) -> &'static str {
        self.phrase.translation
    }

    /// Phrase length in characters
    pub fn phrase_len(&self) -> usize {
        self.target.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn racing_state() -> RaceState {
        let mut state = RaceState::new(LanguageCode::Es, 12345);
        state.start();
        state
    }

    #[test]
    fn test_input_ignored_when_idle() {
        let mut state = RaceState::new(LanguageCode::Es, 1);
        assert!(state.on_input("hola").is_none());
        assert_eq!(state.report().total_typed, 0);
    }

    #[test]
    fn test_prefix_stops_at_first_mismatch() {
        let mut state = racing_state();
        let target = state.phrase_text().to_string();

        // Take the first three target chars and corrupt the middle one.
        let chars: Vec<char> = target.chars().take(3).collect();
        let typed: String = [chars[0], '\u{0}', chars[2]].iter().collect();

        let report = state.on_input(&typed).unwrap();
        assert_eq!(report.cursor, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(report.total_typed, 3);
    }

    #[test]
    fn test_accuracy_bounds() {
        let mut state = racing_state();
        assert_eq!(state.accuracy(), 100);

        let report = state.on_input("\u{0}\u{0}").unwrap();
        assert_eq!(report.accuracy, 0);
        assert_eq!(report.cursor, 0);
    }

    #[test]
    fn test_wpm_zero_without_elapsed_time() {
        let mut state = racing_state();
        let prefix: String = state.phrase_text().chars().take(2).collect();
        let report = state.on_input(&prefix).unwrap();
        assert_eq!(report.wpm, 0);
    }

    #[test]
    fn test_wpm_counts_correct_prefix_only() {
        let mut state = racing_state();
        // Latch the clock, then advance exactly one minute.
        let prefix: String = state.phrase_text().chars().take(1).collect();
        state.on_input(&prefix).unwrap();
        state.tick(60_000);

        let five: String = state.phrase_text().chars().take(5).collect();
        let report = state.on_input(&five).unwrap();
        // 5 correct chars in one minute = 1 word per minute
        assert_eq!(report.wpm, 1);
    }

    #[test]
    fn test_completion_awards_bonus_and_locks_input() {
        let mut state = racing_state();
        let target = state.phrase_text().to_string();

        let report = state.on_input(&target).unwrap();
        assert!(report.completed);
        assert!(!state.racing());
        // No errors, no elapsed time: wpm 0 + full bonus
        assert_eq!(report.score, RACER_BONUS_CAP);

        // Further input is ignored once completed
        assert!(state.on_input("more").is_none());
    }

    #[test]
    fn test_errors_recomputed_from_full_input() {
        let mut state = racing_state();
        let target = state.phrase_text().to_string();

        // A wrong keystroke that gets corrected before completion leaves
        // no trace: errors reflect the current input, not history.
        state.on_input("\u{0}").unwrap();
        let report = state.on_input(&target).unwrap();
        assert!(report.completed);
        assert_eq!(report.errors, 0);
        assert_eq!(report.score, RACER_BONUS_CAP);
    }

    #[test]
    fn test_clock_stops_on_completion() {
        let mut state = racing_state();
        let target = state.phrase_text().to_string();
        state.on_input(&target).unwrap();

        let wpm = state.wpm();
        state.tick(60_000);
        assert_eq!(state.wpm(), wpm);
    }

    #[test]
    fn test_next_phrase_preserves_score() {
        let mut state = racing_state();
        let target = state.phrase_text().to_string();
        state.on_input(&target).unwrap();
        let score = state.score();
        assert!(score > 0);

        state.next_phrase();
        assert!(state.racing());
        assert!(!state.completed());
        assert_eq!(state.score(), score);
        assert_eq!(state.report().cursor, 0);
    }

    #[test]
    fn test_next_phrase_requires_completion() {
        let mut state = racing_state();
        let phrase = state.phrase_text();
        state.next_phrase();
        assert_eq!(state.phrase_text(), phrase);
    }

    #[test]
    fn test_typing_past_phrase_end_is_not_an_error() {
        let mut state = racing_state();
        let mut typed = state.phrase_text().to_string();
        typed.pop();
        typed.push('\u{0}');
        typed.push_str("xyz");

        let report = state.on_input(&typed).unwrap();
        assert_eq!(report.errors, 1);
        assert!(!report.completed);
    }

    #[test]
    fn test_scenario_ab_then_fix() {
        // Target "abc"; typed "abX" then "abc".
        let mut state = racing_state();
        state.target = vec!['a', 'b', 'c'];

        let first = state.on_input("abX").unwrap();
        assert_eq!(first.cursor, 2);
        assert_eq!(first.errors, 1);

        let second = state.on_input("abc").unwrap();
        assert_eq!(second.cursor, 3);
        assert!(second.completed);
        assert!(!state.racing());
    }
}
