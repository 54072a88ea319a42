//! Terminal arcade runner (default binary).
//!
//! Fixed-timestep event loop over the arcade: render the focused game's
//! snapshot, poll input until the next tick, then advance all sessions.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_lingo::engine::Arcade;
use tui_lingo::input::{handle_key_event, should_quit};
use tui_lingo::term::{FrameInput, GameView, TerminalRenderer};
use tui_lingo::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // Seed from the clock; determinism only matters under test.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut arcade = Arcade::new(seed);
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let lines = view.render(&FrameInput {
            focus: arcade.active(),
            lang: arcade.language(),
            script: arcade.script(),
            racer: &arcade.racer_snapshot(),
            typed: arcade.typed(),
            flash: &arcade.flash_snapshot(),
            glyphs: &arcade.glyph_snapshot(),
        });
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Auto-repeat is welcome here: held keys keep typing.
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key, arcade.active()) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, arcade.active()) {
                        // Stale answers are ignored; nothing to surface.
                        let _ = arcade.apply(action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            arcade.tick(TICK_MS);
        }
    }
}
