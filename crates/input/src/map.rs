//! Key mapping from terminal events to session intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Anchor step for a movement key: arrows, vim keys, or WASD (either case).
fn nudge_step(code: KeyCode) -> Option<(i8, i8)> {
    let step = match code {
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, -1),
        KeyCode::Down => (0, 1),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => (-1, 0),
            'l' | 'd' => (1, 0),
            'k' | 'w' => (0, -1),
            'j' | 's' => (0, 1),
            _ => return None,
        },
        _ => return None,
    };
    Some(step)
}

/// Map keyboard input to session intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if let Some((dx, dy)) = nudge_step(key.code) {
        return Some(Intent::Nudge { dx, dy });
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::PlaceAtAnchor),
        KeyCode::Char('r' | 'R') | KeyCode::Backspace => Some(Intent::ResetAnchor),
        _ => None,
    }
}

/// q, Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
