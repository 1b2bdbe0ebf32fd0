//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The world is a fixed 10x10 tile grid:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 10 rows (indexed 0-9, top to bottom)
//! - **Player start**: (1, 1)
//!
//! # Rendering Constants
//!
//! A tile is drawn as a block of terminal cells. Terminal glyphs are roughly
//! twice as tall as they are wide, so a 6x3 block reads as a square. Marker
//! radii are expressed in terminal rows.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_COLS` | 6 | Terminal columns per tile |
//! | `TILE_ROWS` | 3 | Terminal rows per tile |
//! | `NPC_MARKER_RADIUS` | 1.0 | One third of a tile |
//! | `PLAYER_MARKER_RADIUS` | 1.2 | Two fifths of a tile |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval (~60 FPS) |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without key-up events |
//!
//! # Examples
//!
//! ```
//! use border_blaster_types::{Direction, IntentSnapshot, RegionCode, GRID_WIDTH, GRID_HEIGHT};
//!
//! // Region codes are two ASCII letters
//! let code = RegionCode::parse("eg").unwrap();
//! assert_eq!(code.as_str(), "EG");
//! assert!(RegionCode::SENTINEL.is_sentinel());
//!
//! // Up beats left when both are held
//! let intent = IntentSnapshot::default().with(Direction::Up).with(Direction::Left);
//! assert_eq!(intent.resolve(), Some(Direction::Up));
//!
//! // Grid dimensions
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 10);
//! ```

use std::fmt;

/// Grid width in tiles (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in tiles (10 rows)
pub const GRID_HEIGHT: u8 = 10;

/// Terminal columns per tile
pub const TILE_COLS: u16 = 6;

/// Terminal rows per tile
pub const TILE_ROWS: u16 = 3;

/// Drawing surface width in terminal columns
pub const SURFACE_WIDTH: u16 = GRID_WIDTH as u16 * TILE_COLS;

/// Drawing surface height in terminal rows
pub const SURFACE_HEIGHT: u16 = GRID_HEIGHT as u16 * TILE_ROWS;

/// NPC marker radius in terminal rows (a third of a tile)
pub const NPC_MARKER_RADIUS: f32 = 1.0;

/// Player marker radius in terminal rows (two fifths of a tile)
pub const PLAYER_MARKER_RADIUS: f32 = 1.2;

/// Label drawn on every NPC marker
pub const NPC_LABEL: &str = "NPC";

/// Label drawn on the player marker
pub const PLAYER_LABEL: &str = "You";

/// Player starting column
pub const PLAYER_START_X: i8 = 1;

/// Player starting row
pub const PLAYER_START_Y: i8 = 1;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// How long a key counts as held after its last press/repeat when the
/// terminal never reports releases.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Maximum number of NPCs in a roster
pub const MAX_NPCS: usize = 16;

/// Maximum number of regions in a registry (sentinel excluded)
pub const MAX_REGIONS: usize = 16;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) color.
    ///
    /// # Examples
    ///
    /// ```
    /// use border_blaster_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#34495e"), Some(Rgb::new(0x34, 0x49, 0x5e)));
    /// assert_eq!(Rgb::from_hex("blue"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Scale every channel toward black by `percent` (0-100).
    pub fn darken(self, percent: u8) -> Self {
        let keep = 100 - u16::from(percent.min(100));
        let scale = |c: u8| ((u16::from(c) * keep) / 100) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Two-letter region identifier (`EG`, `KE`, ...).
///
/// Codes are stored upper-cased. [`RegionCode::SENTINEL`] (`XX`) stands for
/// "no region": empty cells, out-of-bounds queries and unknown codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCode([u8; 2]);

impl RegionCode {
    /// The "open sea / out of bounds" region.
    pub const SENTINEL: RegionCode = RegionCode(*b"XX");

    pub const fn new(code: [u8; 2]) -> Self {
        Self(code)
    }

    /// Parse a code from exactly two ASCII alphanumerics (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.as_bytes() {
            &[a, b] if a.is_ascii_alphanumeric() && b.is_ascii_alphanumeric() => {
                Some(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl fmt::Debug for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegionCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical movement directions (cardinal only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Resolution order when several directions are held at once.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Tile delta `(dx, dy)`; y grows downward.
    ///
    /// # Examples
    ///
    /// ```
    /// use border_blaster_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Per-frame view of which logical directions are held.
///
/// Taken once at the start of each frame from the live key flags; the
/// simulation never sees the flags themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl IntentSnapshot {
    /// Return a copy with `dir` marked as held.
    pub fn with(mut self, dir: Direction) -> Self {
        match dir {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
        self
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// The single direction to attempt this frame: the first held one in
    /// [`Direction::PRIORITY`] order. Never combines into a diagonal.
    pub fn resolve(&self) -> Option<Direction> {
        Direction::PRIORITY
            .iter()
            .copied()
            .find(|&dir| self.is_held(dir))
    }
}
