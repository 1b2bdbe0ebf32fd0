//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, treating each character cell as a pixel with a glyph on top.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide canvas-like primitives (rects, translucent lines, circles, centered text)
//! - Allow precise control over aspect ratio (6x3 cells per tile reads as square)

pub mod fb;
pub mod game_view;
pub mod hud_view;
pub mod renderer;
pub mod world_view;

pub use border_blaster_core as core;
pub use border_blaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use hud_view::{HudView, HUD_HEIGHT};
pub use renderer::{
    encode_diff_into, encode_enter_into, encode_exit_into, encode_full_into, TerminalRenderer,
    KEY_REPORTING_FLAGS,
};
pub use world_view::{WorldView, GRID_LINE_SHADE, LABEL_COLOR, NPC_COLOR};
