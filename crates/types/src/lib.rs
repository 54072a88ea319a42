//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Fixed timestep for the main loop (milliseconds)
pub const TICK_MS: u32 = 16;

/// Word Flash timing (milliseconds)
pub const FLASH_ROUND_MS: u32 = 7000;
pub const FLASH_ADVANCE_MS: u32 = 900;

/// Glyph Match timing (milliseconds)
pub const GLYPH_CORRECT_ADVANCE_MS: u32 = 700;
pub const GLYPH_WRONG_ADVANCE_MS: u32 = 1000;
pub const GLYPH_GAME_OVER_MS: u32 = 800;

/// Choices offered per multiple-choice round (1 correct + 3 distractors)
pub const CHOICE_COUNT: usize = 4;

/// Glyph Match lives at the start of a session
pub const START_LIVES: u32 = 3;

/// Word Flash scoring: base points plus a per-streak bonus
pub const FLASH_BASE_POINTS: u32 = 10;
pub const FLASH_STREAK_BONUS: u32 = 2;

/// Glyph Match points per correct answer
pub const GLYPH_POINTS: u32 = 15;

/// Type Racer completion bonus: max(0, BONUS_CAP - PENALTY * errors)
pub const RACER_BONUS_CAP: u32 = 100;
pub const RACER_ERROR_PENALTY: u32 = 5;

/// Characters per "word" for WPM purposes
pub const CHARS_PER_WORD: u32 = 5;

/// A phrase with its English translation (Type Racer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseEntry {
    pub text: &'static str,
    pub translation: &'static str,
}

/// A vocabulary word with its meaning (Word Flash)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabEntry {
    pub word: &'static str,
    pub meaning: &'static str,
}

/// A glyph with its romanization or name (Glyph Match)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEntry {
    pub character: &'static str,
    pub answer: &'static str,
}

/// Languages with phrase and vocabulary tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    Es,
    Fr,
    Ja,
    Ar,
    De,
    It,
}

impl LanguageCode {
    /// All languages, in selector order
    pub const ALL: [LanguageCode; 6] = [
        LanguageCode::Es,
        LanguageCode::Fr,
        LanguageCode::Ja,
        LanguageCode::Ar,
        LanguageCode::De,
        LanguageCode::It,
    ];

    /// Parse language code from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "es" => Some(LanguageCode::Es),
            "fr" => Some(LanguageCode::Fr),
            "ja" => Some(LanguageCode::Ja),
            "ar" => Some(LanguageCode::Ar),
            "de" => Some(LanguageCode::De),
            "it" => Some(LanguageCode::It),
            _ => None,
        }
    }

    /// Convert to lowercase code string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::Ja => "ja",
            LanguageCode::Ar => "ar",
            LanguageCode::De => "de",
            LanguageCode::It => "it",
        }
    }

    /// Display name for selectors and headers
    pub fn label(&self) -> &'static str {
        match self {
            LanguageCode::Es => "Spanish",
            LanguageCode::Fr => "French",
            LanguageCode::Ja => "Japanese",
            LanguageCode::Ar => "Arabic",
            LanguageCode::De => "German",
            LanguageCode::It => "Italian",
        }
    }

    /// Next language in selector order (wraps around)
    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        LanguageCode::Es
    }
}

/// Scripts with glyph tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptCode {
    Ja,
    Ar,
    Zh,
    Gr,
}

impl ScriptCode {
    /// All scripts, in selector order
    pub const ALL: [ScriptCode; 4] = [
        ScriptCode::Ja,
        ScriptCode::Ar,
        ScriptCode::Zh,
        ScriptCode::Gr,
    ];

    /// Parse script code from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ja" => Some(ScriptCode::Ja),
            "ar" => Some(ScriptCode::Ar),
            "zh" => Some(ScriptCode::Zh),
            "gr" => Some(ScriptCode::Gr),
            _ => None,
        }
    }

    /// Convert to lowercase code string
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptCode::Ja => "ja",
            ScriptCode::Ar => "ar",
            ScriptCode::Zh => "zh",
            ScriptCode::Gr => "gr",
        }
    }

    /// Display name for selectors and headers
    pub fn label(&self) -> &'static str {
        match self {
            ScriptCode::Ja => "Hiragana",
            ScriptCode::Ar => "Arabic",
            ScriptCode::Zh => "Hanzi",
            ScriptCode::Gr => "Greek",
        }
    }

    /// Per-script round prompt
    pub fn prompt(&self) -> &'static str {
        match self {
            ScriptCode::Zh => "Choose the correct pronunciation & meaning",
            ScriptCode::Gr => "Choose the correct Greek letter name",
            ScriptCode::Ja | ScriptCode::Ar => "Choose the correct romanization",
        }
    }

    /// Next script in selector order (wraps around)
    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Default for ScriptCode {
    fn default() -> Self {
        ScriptCode::Ja
    }
}

/// The three mini-games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Racer,
    Flash,
    Glyphs,
}

impl GameKind {
    /// Parse game kind from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "racer" => Some(GameKind::Racer),
            "flash" => Some(GameKind::Flash),
            "glyphs" => Some(GameKind::Glyphs),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Racer => "racer",
            GameKind::Flash => "flash",
            GameKind::Glyphs => "glyphs",
        }
    }

    /// Display name for tabs
    pub fn label(&self) -> &'static str {
        match self {
            GameKind::Racer => "Type Racer",
            GameKind::Flash => "Word Flash",
            GameKind::Glyphs => "Glyph Match",
        }
    }

    /// Next game in tab order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            GameKind::Racer => GameKind::Flash,
            GameKind::Flash => GameKind::Glyphs,
            GameKind::Glyphs => GameKind::Racer,
        }
    }
}

/// Actions produced by the input layer and consumed by the arcade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Switch to the next game tab
    NextGame,
    /// Cycle the language (Racer/Flash) or script (Glyph Match)
    CyclePool,
    /// Start the active game, or advance to the next phrase
    Start,
    /// Pick choice slot 0-3 in the active multiple-choice game
    Choice(usize),
    /// Append a character to the Type Racer input
    TypeChar(char),
    /// Delete the last character of the Type Racer input
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip() {
        for lang in LanguageCode::ALL {
            assert_eq!(LanguageCode::from_str(lang.as_str()), Some(lang));
        }
        assert_eq!(LanguageCode::from_str("ES"), Some(LanguageCode::Es));
        assert_eq!(LanguageCode::from_str("xx"), None);
    }

    #[test]
    fn test_script_round_trip() {
        for script in ScriptCode::ALL {
            assert_eq!(ScriptCode::from_str(script.as_str()), Some(script));
        }
        assert_eq!(ScriptCode::from_str("xx"), None);
    }

    #[test]
    fn test_game_kind_round_trip() {
        for game in [GameKind::Racer, GameKind::Flash, GameKind::Glyphs] {
            assert_eq!(GameKind::from_str(game.as_str()), Some(game));
        }
        assert_eq!(GameKind::from_str("chess"), None);
    }

    #[test]
    fn test_cycles_wrap() {
        let mut lang = LanguageCode::default();
        for _ in 0..LanguageCode::ALL.len() {
            lang = lang.next();
        }
        assert_eq!(lang, LanguageCode::default());

        let mut game = GameKind::Racer;
        for _ in 0..3 {
            game = game.next();
        }
        assert_eq!(game, GameKind::Racer);
    }

    #[test]
    fn test_script_prompts() {
        assert!(ScriptCode::Zh.prompt().contains("pronunciation"));
        assert!(ScriptCode::Gr.prompt().contains("letter name"));
        assert_eq!(ScriptCode::Ja.prompt(), ScriptCode::Ar.prompt());
    }
}
