//! The arcade: three independent game sessions behind one front door.
//!
//! Owns the selected language/script, the active tab, and the Type Racer
//! input buffer. All three games stay live at once; ticks fan out to each.

use tui_lingo_core::content;
use tui_lingo_core::flash::{FlashOutcome, FlashPhase, FlashState};
use tui_lingo_core::glyphs::{GlyphOutcome, GlyphPhase, GlyphState};
use tui_lingo_core::racer::{RaceReport, RaceState};
use tui_lingo_core::snapshot::{FlashSnapshot, GlyphSnapshot, RacerSnapshot};
use tui_lingo_types::{GameKind, LanguageCode, ScriptCode, UiAction};

/// Why an answer was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerError {
    /// No round is awaiting an answer
    NotAwaiting,
    /// Choice slot outside the current choice list
    SlotOutOfRange,
    /// The session is over; restart required
    GameOver,
    /// The active game has no choice rounds (Type Racer)
    NotChoiceGame,
}

impl AnswerError {
    pub fn code(self) -> &'static str {
        match self {
            AnswerError::NotAwaiting => "not_awaiting",
            AnswerError::SlotOutOfRange => "slot_out_of_range",
            AnswerError::GameOver => "game_over",
            AnswerError::NotChoiceGame => "not_choice_game",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AnswerError::NotAwaiting => "no round is awaiting an answer",
            AnswerError::SlotOutOfRange => "choice slot out of range",
            AnswerError::GameOver => "session is over, restart to continue",
            AnswerError::NotChoiceGame => "active game takes typed input",
        }
    }
}

/// What an applied answer did, for UI messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Flash(FlashOutcome),
    Glyph(GlyphOutcome),
}

pub struct Arcade {
    racer: RaceState,
    flash: FlashState,
    glyphs: GlyphState,
    lang: LanguageCode,
    script: ScriptCode,
    active: GameKind,
    typed: String,
}

impl Arcade {
    /// Create all three sessions from one seed. Nothing starts until the
    /// player does.
    pub fn new(seed: u32) -> Self {
        let lang = LanguageCode::default();
        let script = ScriptCode::default();
        Self {
            racer: RaceState::new(lang, seed),
            flash: FlashState::new(lang, seed.wrapping_add(1)),
            glyphs: GlyphState::new(script, seed.wrapping_add(2)),
            lang,
            script,
            active: GameKind::Racer,
            typed: String::new(),
        }
    }

    pub fn active(&self) -> GameKind {
        self.active
    }

    pub fn language(&self) -> LanguageCode {
        self.lang
    }

    pub fn script(&self) -> ScriptCode {
        self.script
    }

    /// The Type Racer input buffer
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Switch to the next game tab
    pub fn next_game(&mut self) {
        self.active = self.active.next();
    }

    /// Cycle the pool selector for the active game: script for Glyph
    /// Match, language for the other two. Applies from the next round.
    pub fn cycle_pool(&mut self) {
        if self.active == GameKind::Glyphs {
            self.script = self.script.next();
            self.glyphs.set_script(self.script);
        } else {
            self.lang = self.lang.next();
            self.racer.set_language(self.lang);
            self.flash.set_language(self.lang);
        }
    }

    /// Select the language by code string, falling back to the default
    /// when the code has no table.
    pub fn set_language_code(&mut self, code: &str) {
        self.lang = content::language_or_default(code);
        self.racer.set_language(self.lang);
        self.flash.set_language(self.lang);
    }

    /// Select the script by code string, falling back to the default
    /// when the code has no table.
    pub fn set_script_code(&mut self, code: &str) {
        self.script = content::script_or_default(code);
        self.glyphs.set_script(self.script);
    }

    /// Start (or restart) the active game. For a completed Type Racer
    /// phrase this advances to the next phrase, keeping the score.
    pub fn start(&mut self) {
        match self.active {
            GameKind::Racer => {
                self.typed.clear();
                if self.racer.completed() {
                    self.racer.next_phrase();
                } else {
                    self.racer.start();
                }
            }
            GameKind::Flash => self.flash.start(),
            GameKind::Glyphs => self.glyphs.start(),
        }
    }

    /// Append a character to the racer buffer. No-op unless Type Racer is
    /// active and racing.
    pub fn type_char(&mut self, ch: char) -> Option<RaceReport> {
        if self.active != GameKind::Racer || !self.racer.racing() {
            return None;
        }
        self.typed.push(ch);
        self.racer.on_input(&self.typed)
    }

    /// Delete the last character of the racer buffer.
    pub fn backspace(&mut self) -> Option<RaceReport> {
        if self.active != GameKind::Racer || !self.racer.racing() {
            return None;
        }
        self.typed.pop();
        self.racer.on_input(&self.typed)
    }

    /// Answer the active game's live round by choice slot.
    ///
    /// The cores ignore invalid events; this classifies them for callers
    /// that want to know what happened.
    pub fn answer(&mut self, slot: usize) -> Result<AnswerFeedback, AnswerError> {
        match self.active {
            GameKind::Racer => Err(AnswerError::NotChoiceGame),
            GameKind::Flash => {
                if self.flash.phase() != FlashPhase::Awaiting {
                    return Err(AnswerError::NotAwaiting);
                }
                if slot >= self.flash.choices().len() {
                    return Err(AnswerError::SlotOutOfRange);
                }
                self.flash
                    .answer(slot)
                    .map(AnswerFeedback::Flash)
                    .ok_or(AnswerError::NotAwaiting)
            }
            GameKind::Glyphs => match self.glyphs.phase() {
                GlyphPhase::GameOver => Err(AnswerError::GameOver),
                GlyphPhase::Awaiting => {
                    if slot >= self.glyphs.choices().len() {
                        return Err(AnswerError::SlotOutOfRange);
                    }
                    self.glyphs
                        .answer(slot)
                        .map(AnswerFeedback::Glyph)
                        .ok_or(AnswerError::NotAwaiting)
                }
                _ => Err(AnswerError::NotAwaiting),
            },
        }
    }

    /// Apply a UI action. Answer errors are reported; everything else
    /// always succeeds.
    pub fn apply(&mut self, action: UiAction) -> Result<(), AnswerError> {
        match action {
            UiAction::NextGame => self.next_game(),
            UiAction::CyclePool => self.cycle_pool(),
            UiAction::Start => self.start(),
            UiAction::Choice(slot) => {
                self.answer(slot)?;
            }
            UiAction::TypeChar(ch) => {
                self.type_char(ch);
            }
            UiAction::Backspace => {
                self.backspace();
            }
        }
        Ok(())
    }

    /// Advance all three sessions by one timestep.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.racer.tick(elapsed_ms);
        self.flash.tick(elapsed_ms);
        self.glyphs.tick(elapsed_ms);
    }

    pub fn racer_snapshot(&self) -> RacerSnapshot {
        self.racer.snapshot()
    }

    pub fn flash_snapshot(&self) -> FlashSnapshot {
        self.flash.snapshot()
    }

    pub fn glyph_snapshot(&self) -> GlyphSnapshot {
        self.glyphs.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_lingo_types::{FLASH_ROUND_MS, START_LIVES};

    #[test]
    fn test_answer_requires_choice_game() {
        let mut arcade = Arcade::new(1);
        assert_eq!(arcade.answer(0), Err(AnswerError::NotChoiceGame));
    }

    #[test]
    fn test_answer_before_start_is_not_awaiting() {
        let mut arcade = Arcade::new(1);
        arcade.next_game();
        assert_eq!(arcade.active(), GameKind::Flash);
        assert_eq!(arcade.answer(0), Err(AnswerError::NotAwaiting));
    }

    #[test]
    fn test_flash_answer_round_trip() {
        let mut arcade = Arcade::new(1);
        arcade.next_game();
        arcade.start();

        let snap = arcade.flash_snapshot();
        assert!(snap.active);
        assert_eq!(arcade.answer(snap.choices.len()), Err(AnswerError::SlotOutOfRange));

        let result = arcade.answer(0);
        assert!(matches!(result, Ok(AnswerFeedback::Flash(_))));
        // Second answer lands in the reveal phase
        assert_eq!(arcade.answer(0), Err(AnswerError::NotAwaiting));
    }

    #[test]
    fn test_glyph_game_over_reported() {
        let mut arcade = Arcade::new(1);
        arcade.next_game();
        arcade.next_game();
        assert_eq!(arcade.active(), GameKind::Glyphs);
        arcade.start();
        assert_eq!(arcade.glyph_snapshot().lives, START_LIVES);

        // Answer slot 0 every round. Lives never regenerate, so the
        // occasional lucky hit only delays the third wrong answer.
        let mut guard = 0;
        while !arcade.glyph_snapshot().game_over {
            match arcade.answer(0) {
                Ok(AnswerFeedback::Glyph(_)) => {}
                other => panic!("unexpected answer result: {:?}", other),
            }
            arcade.tick(10_000);
            guard += 1;
            assert!(guard < 1000, "session never ended");
        }

        assert_eq!(arcade.glyph_snapshot().lives, 0);
        assert_eq!(arcade.answer(0), Err(AnswerError::GameOver));
    }

    #[test]
    fn test_typed_buffer_feeds_racer() {
        let mut arcade = Arcade::new(7);
        arcade.start();
        let phrase = arcade.racer_snapshot().phrase;
        let first = phrase.chars().next().unwrap();

        let report = arcade.type_char(first).unwrap();
        assert_eq!(report.cursor, 1);
        assert_eq!(arcade.typed(), first.to_string());

        let report = arcade.backspace().unwrap();
        assert_eq!(report.cursor, 0);
        assert!(arcade.typed().is_empty());
    }

    #[test]
    fn test_typing_ignored_off_racer_tab() {
        let mut arcade = Arcade::new(7);
        arcade.start();
        arcade.next_game();
        assert!(arcade.type_char('x').is_none());
        assert!(arcade.typed().is_empty());
    }

    #[test]
    fn test_start_clears_typed_buffer() {
        let mut arcade = Arcade::new(7);
        arcade.start();
        arcade.type_char('x');
        arcade.start();
        assert!(arcade.typed().is_empty());
    }

    #[test]
    fn test_cycle_pool_targets_active_game() {
        let mut arcade = Arcade::new(1);
        let lang = arcade.language();
        let script = arcade.script();

        arcade.cycle_pool();
        assert_ne!(arcade.language(), lang);
        assert_eq!(arcade.script(), script);

        arcade.next_game();
        arcade.next_game();
        arcade.cycle_pool();
        assert_ne!(arcade.script(), script);
    }

    #[test]
    fn test_language_code_fallback() {
        let mut arcade = Arcade::new(1);
        arcade.set_language_code("fr");
        assert_eq!(arcade.language(), LanguageCode::Fr);

        arcade.set_language_code("zz");
        assert_eq!(arcade.language(), LanguageCode::default());

        arcade.set_script_code("gr");
        assert_eq!(arcade.script(), ScriptCode::Gr);
        arcade.set_script_code("zz");
        assert_eq!(arcade.script(), ScriptCode::default());
    }

    #[test]
    fn test_tick_reaches_inactive_games_too() {
        let mut arcade = Arcade::new(1);
        arcade.next_game();
        arcade.start();
        assert_eq!(arcade.flash_snapshot().remaining_ms, FLASH_ROUND_MS);

        // Flash keeps counting down while another tab is focused.
        arcade.next_game();
        arcade.tick(1000);
        assert_eq!(arcade.flash_snapshot().remaining_ms, FLASH_ROUND_MS - 1000);
    }
}
