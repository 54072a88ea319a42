//! Key mapping from terminal events to arcade actions.
//!
//! The mapping depends on which game has focus: Type Racer consumes
//! printable keys as typed text, so the global chords avoid plain letters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_lingo_types::{GameKind, UiAction};

/// Map keyboard input to an arcade action for the focused game.
pub fn handle_key_event(key: KeyEvent, focus: GameKind) -> Option<UiAction> {
    // Global chords first: they win over typed text.
    match key.code {
        KeyCode::Tab => return Some(UiAction::NextGame),
        KeyCode::Enter => return Some(UiAction::Start),
        KeyCode::Char('l') | KeyCode::Char('L')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            return Some(UiAction::CyclePool)
        }
        _ => {}
    }

    match focus {
        GameKind::Racer => match key.code {
            KeyCode::Backspace => Some(UiAction::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UiAction::TypeChar(ch))
            }
            _ => None,
        },
        GameKind::Flash | GameKind::Glyphs => match key.code {
            KeyCode::Char(ch @ '1'..='4') => {
                Some(UiAction::Choice(ch as usize - '1' as usize))
            }
            // Letter shortcuts are safe off the typing tab
            KeyCode::Char('l') | KeyCode::Char('L') => Some(UiAction::CyclePool),
            KeyCode::Char(' ') => Some(UiAction::Start),
            _ => None,
        },
    }
}

/// Check if key should quit the application.
///
/// `q` only quits outside Type Racer, where it is typed text.
pub fn should_quit(key: KeyEvent, focus: GameKind) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    focus != GameKind::Racer && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
