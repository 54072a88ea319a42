//! GameView: turns core snapshots into styled lines.
//!
//! Pure data in, pure data out - nothing here touches the terminal, so the
//! layout is unit-testable.

use tui_lingo_core::snapshot::{lives_hearts, FlashSnapshot, GlyphSnapshot, RacerSnapshot};
use tui_lingo_types::{GameKind, LanguageCode, ScriptCode, START_LIVES};

/// Visual treatment of a span, mapped to colors by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Dim,
    Title,
    Good,
    Bad,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One terminal row of styled spans
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line(pub Vec<Span>);

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Line(vec![Span::new(text, Tone::Plain)])
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Line(vec![Span::new(text, Tone::Dim)])
    }

    pub fn title(text: impl Into<String>) -> Self {
        Line(vec![Span::new(text, Tone::Title)])
    }

    /// Concatenated text without styling (used by tests)
    pub fn text(&self) -> String {
        self.0.iter().map(|s| s.text.as_str()).collect()
    }
}

const BAR_WIDTH: usize = 28;

/// Horizontal meter: filled blocks for `fraction` of `width`
fn bar(fraction: f32, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f32).round() as usize;
    let mut out = String::with_capacity(width);
    for _ in 0..filled {
        out.push('█');
    }
    for _ in filled..width {
        out.push('░');
    }
    out
}

/// Everything one frame needs, borrowed from the arcade
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub focus: GameKind,
    pub lang: LanguageCode,
    pub script: ScriptCode,
    pub racer: &'a RacerSnapshot,
    pub typed: &'a str,
    pub flash: &'a FlashSnapshot,
    pub glyphs: &'a GlyphSnapshot,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the whole frame for the focused game.
    pub fn render(&self, frame: &FrameInput) -> Vec<Line> {
        let mut lines = Vec::with_capacity(24);

        // Tab bar
        let mut tabs = Vec::new();
        for game in [GameKind::Racer, GameKind::Flash, GameKind::Glyphs] {
            let tone = if game == frame.focus { Tone::Accent } else { Tone::Dim };
            tabs.push(Span::new(format!(" {} ", game.label()), tone));
            tabs.push(Span::new("|", Tone::Dim));
        }
        tabs.pop();
        lines.push(Line(tabs));

        let pool = match frame.focus {
            GameKind::Glyphs => frame.script.label(),
            _ => frame.lang.label(),
        };
        lines.push(Line::dim(format!("pool: {}", pool)));
        lines.push(Line::default());

        match frame.focus {
            GameKind::Racer => self.racer_lines(frame.racer, frame.typed, &mut lines),
            GameKind::Flash => self.flash_lines(frame.flash, &mut lines),
            GameKind::Glyphs => self.glyph_lines(frame.glyphs, &mut lines),
        }

        lines.push(Line::default());
        lines.push(Line::dim(
            "enter start · tab switch game · ctrl-l pool · esc quit",
        ));
        lines
    }

    fn racer_lines(&self, snap: &RacerSnapshot, typed: &str, lines: &mut Vec<Line>) {
        lines.push(Line::title("Type Racer"));

        if snap.completed {
            lines.push(Line(vec![Span::new(
                format!("✓ {} — {} WPM!", snap.translation, snap.wpm),
                Tone::Good,
            )]));
        } else {
            lines.push(Line::dim(snap.translation));
        }
        lines.push(Line::default());

        // Phrase with per-char credit: green prefix, highlighted cursor
        let mut spans = Vec::new();
        for (i, ch) in snap.phrase.chars().enumerate() {
            let tone = if i < snap.cursor {
                Tone::Good
            } else if i == snap.cursor && snap.racing {
                Tone::Accent
            } else {
                Tone::Plain
            };
            spans.push(Span::new(ch.to_string(), tone));
        }
        lines.push(Line(spans));

        let typed_tone = if snap.errors > 0 { Tone::Bad } else { Tone::Plain };
        lines.push(Line(vec![
            Span::new("> ", Tone::Dim),
            Span::new(typed, typed_tone),
        ]));
        lines.push(Line::default());

        lines.push(Line(vec![Span::new(
            format!("[{}]", bar(snap.progress, BAR_WIDTH)),
            Tone::Accent,
        )]));
        lines.push(Line::plain(format!(
            "wpm {:>3}   accuracy {:>3}%   errors {:>2}   score {}",
            snap.wpm, snap.accuracy, snap.errors, snap.score
        )));

        if !snap.racing && !snap.completed {
            lines.push(Line::default());
            lines.push(Line::dim("press enter to begin the race"));
        } else if snap.completed {
            lines.push(Line::default());
            lines.push(Line::dim("press enter for the next phrase"));
        }
    }

    fn flash_lines(&self, snap: &FlashSnapshot, lines: &mut Vec<Line>) {
        lines.push(Line::title("Word Flash"));

        if !snap.active {
            lines.push(Line::default());
            lines.push(Line::dim("press enter to start"));
            return;
        }

        lines.push(Line::default());
        lines.push(Line(vec![Span::new(snap.word, Tone::Accent)]));
        lines.push(Line(vec![Span::new(
            format!("[{}]", bar(snap.timer_fraction, BAR_WIDTH)),
            if snap.revealing { Tone::Dim } else { Tone::Plain },
        )]));
        lines.push(Line::default());

        self.choice_lines(&snap.choices, snap.correct_slot, snap.chosen_slot, lines);

        lines.push(Line::default());
        lines.push(Line::plain(format!(
            "score {}   streak {}",
            snap.score, snap.streak
        )));
    }

    fn glyph_lines(&self, snap: &GlyphSnapshot, lines: &mut Vec<Line>) {
        lines.push(Line::title("Glyph Match"));

        if snap.game_over {
            lines.push(Line::default());
            lines.push(Line(vec![Span::new("✕", Tone::Bad)]));
            lines.push(Line::plain(format!("Game over! Score: {}", snap.score)));
            lines.push(Line::default());
            lines.push(Line::dim("press enter to play again"));
            return;
        }
        if !snap.active {
            lines.push(Line::default());
            lines.push(Line::dim("press enter to start"));
            return;
        }

        lines.push(Line::default());
        lines.push(Line(vec![Span::new(snap.character, Tone::Accent)]));
        lines.push(Line::dim(snap.prompt));
        lines.push(Line::default());

        self.choice_lines(&snap.choices, snap.correct_slot, snap.chosen_slot, lines);

        lines.push(Line::default());
        lines.push(Line(vec![
            Span::new(format!("score {}   ", snap.score), Tone::Plain),
            Span::new(lives_hearts(snap.lives, START_LIVES), Tone::Bad),
        ]));
    }

    fn choice_lines(
        &self,
        choices: &[&'static str],
        correct_slot: Option<usize>,
        chosen_slot: Option<usize>,
        lines: &mut Vec<Line>,
    ) {
        for (slot, label) in choices.iter().enumerate() {
            let tone = match (correct_slot, chosen_slot) {
                (Some(correct), _) if slot == correct => Tone::Good,
                (Some(_), Some(chosen)) if slot == chosen => Tone::Bad,
                (Some(_), _) => Tone::Dim,
                (None, _) => Tone::Plain,
            };
            lines.push(Line(vec![
                Span::new(format!("  {}. ", slot + 1), Tone::Dim),
                Span::new(*label, tone),
            ]));
        }
    }
}
