//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto movement bindings and keeps the per-key intent
//! flags the frame driver snapshots once per frame (including terminals
//! without key-release events).

pub mod intent;
pub mod map;

pub use border_blaster_types as types;

pub use intent::IntentFlags;
pub use map::{direction_key, should_quit, DirectionKey};
