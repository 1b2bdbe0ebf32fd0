//! Key mapping from terminal events to direction keys.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Physical keys bound to movement.
///
/// Each logical direction has two bindings: an arrow key and a WASD alias.
/// They are tracked separately so releasing one does not cancel the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
}

impl DirectionKey {
    pub const ALL: [DirectionKey; 8] = [
        DirectionKey::ArrowUp,
        DirectionKey::ArrowDown,
        DirectionKey::ArrowLeft,
        DirectionKey::ArrowRight,
        DirectionKey::W,
        DirectionKey::A,
        DirectionKey::S,
        DirectionKey::D,
    ];

    /// Logical direction this key drives.
    pub fn direction(&self) -> Direction {
        match self {
            DirectionKey::ArrowUp | DirectionKey::W => Direction::Up,
            DirectionKey::ArrowDown | DirectionKey::S => Direction::Down,
            DirectionKey::ArrowLeft | DirectionKey::A => Direction::Left,
            DirectionKey::ArrowRight | DirectionKey::D => Direction::Right,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Map a key code to its movement binding.
pub fn direction_key(code: KeyCode) -> Option<DirectionKey> {
    match code {
        KeyCode::Up => Some(DirectionKey::ArrowUp),
        KeyCode::Down => Some(DirectionKey::ArrowDown),
        KeyCode::Left => Some(DirectionKey::ArrowLeft),
        KeyCode::Right => Some(DirectionKey::ArrowRight),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(DirectionKey::W),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(DirectionKey::A),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(DirectionKey::S),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(DirectionKey::D),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
