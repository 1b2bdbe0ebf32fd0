//! Key events -> intent flags -> world step.

use border_blaster::core::WorldState;
use border_blaster::input::{should_quit, DirectionKey, IntentFlags};
use border_blaster::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_arrow_and_wasd_drive_the_same_direction() {
    let mut flags = IntentFlags::new();
    assert!(flags.apply(key(KeyCode::Char('w'), KeyEventKind::Press), 0));
    assert!(flags.apply(key(KeyCode::Up, KeyEventKind::Press), 0));

    // Releasing one binding keeps the other held.
    flags.apply(key(KeyCode::Up, KeyEventKind::Release), 5);
    let snap = flags.snapshot(10);
    assert!(snap.is_held(Direction::Up));
    assert_eq!(snap.resolve(), Some(Direction::Up));
}

#[test]
fn test_two_held_keys_move_once_per_frame() {
    let mut world = WorldState::default();
    let mut flags = IntentFlags::new();
    flags.apply(key(KeyCode::Left, KeyEventKind::Press), 0);
    flags.apply(key(KeyCode::Up, KeyEventKind::Press), 0);

    let out = world.step(flags.snapshot(16));
    assert_eq!(out.direction, Some(Direction::Up));
    assert_eq!(world.player().position(), (1, 0));

    // Up keeps priority even when the edge blocks it.
    let out = world.step(flags.snapshot(32));
    assert_eq!(out.direction, Some(Direction::Up));
    assert!(!out.moved);
    assert_eq!(world.player().position(), (1, 0));
}

#[test]
fn test_tap_expires_without_release_events() {
    let mut world = WorldState::default();
    let mut flags = IntentFlags::new().with_key_release_timeout_ms(100);
    flags.apply(key(KeyCode::Char('d'), KeyEventKind::Press), 0);

    assert!(world.step(flags.snapshot(16)).moved);
    assert!(world.step(flags.snapshot(100)).moved);
    assert!(!world.step(flags.snapshot(101)).moved);
    assert_eq!(world.player().position(), (3, 1));
}

#[test]
fn test_repeats_keep_a_hold_alive() {
    let mut flags = IntentFlags::new().with_key_release_timeout_ms(100);
    flags.apply(key(KeyCode::Down, KeyEventKind::Press), 0);
    flags.apply(key(KeyCode::Down, KeyEventKind::Repeat), 90);
    assert!(flags.snapshot(180).is_held(Direction::Down));
}

#[test]
fn test_release_events_disable_the_timeout_per_key() {
    let mut flags = IntentFlags::new().with_key_release_timeout_ms(100);
    flags.apply(key(KeyCode::Right, KeyEventKind::Press), 0);
    flags.apply(key(KeyCode::Right, KeyEventKind::Release), 10);
    assert!(flags.releases_reported(DirectionKey::ArrowRight));

    // A key that reports releases stays held until released.
    flags.apply(key(KeyCode::Right, KeyEventKind::Press), 20);
    assert!(flags.snapshot(10_000).is_held(Direction::Right));
    flags.apply(key(KeyCode::Right, KeyEventKind::Release), 10_010);
    assert!(!flags.snapshot(10_020).any());
}

#[test]
fn test_letter_tap_expires_after_arrow_release() {
    // Arrow keys may report releases while letter keys do not.
    let mut world = WorldState::default();
    let mut flags = IntentFlags::new().with_key_release_timeout_ms(50);
    flags.apply(key(KeyCode::Up, KeyEventKind::Press), 0);
    flags.apply(key(KeyCode::Up, KeyEventKind::Release), 50);
    flags.apply(key(KeyCode::Char('d'), KeyEventKind::Press), 100);

    let moves = (1..=625u64)
        .filter(|frame| world.step(flags.snapshot(100 + frame * 16)).moved)
        .count();

    // Held for the frames at 116, 132 and 148 ms only.
    assert_eq!(moves, 3);
    assert_eq!(world.player().position(), (4, 1));
    assert!(!flags.snapshot(10_000).is_held(Direction::Right));
}

#[test]
fn test_non_movement_keys_are_ignored() {
    let mut flags = IntentFlags::new();
    assert!(!flags.apply(key(KeyCode::Char('x'), KeyEventKind::Press), 0));
    assert!(!flags.snapshot(0).any());

    assert!(should_quit(key(KeyCode::Char('q'), KeyEventKind::Press)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('c'), KeyEventKind::Press)));
}
