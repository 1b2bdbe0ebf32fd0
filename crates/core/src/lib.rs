//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the world model and the per-frame simulation step.
//! It has **zero dependencies** on terminal I/O or input devices, making it:
//!
//! - **Deterministic**: The same intent sequence always produces the same world
//! - **Testable**: Every rule is reachable without a terminal
//! - **Total**: No operation fails; edge cases resolve to defined fallbacks
//!
//! # Module Structure
//!
//! - [`region`]: Region registry (code -> name, color, fact) with a sentinel fallback
//! - [`grid`]: 10x10 world grid of region codes
//! - [`entity`]: Player token and stationary NPC roster
//! - [`movement`]: Bounded one-tile cardinal moves
//! - [`interaction`]: 4-directional NPC adjacency detection
//! - [`hud`]: Region name / message text shown to the player
//! - [`world`]: Complete simulation state and the per-frame step
//!
//! # Rules
//!
//! - **One move per frame**: Held directions resolve by priority up > down > left > right
//! - **Level-triggered**: Holding a direction keeps moving every frame until the edge
//! - **Edges block**: Moves off the grid are rejected silently
//! - **Proximity chat**: After a successful move, the first NPC exactly one step
//!   away greets the player
//!
//! # Example
//!
//! ```
//! use border_blaster_core::WorldState;
//! use border_blaster_types::{Direction, IntentSnapshot};
//!
//! // Start in the default world at (1, 1)
//! let mut world = WorldState::default();
//!
//! // Hold "up" for one frame
//! let out = world.step(IntentSnapshot::default().with(Direction::Up));
//! assert!(out.moved);
//! assert_eq!(world.player().position(), (1, 0));
//! assert_eq!(world.hud().region_name(), "Morocco");
//! ```

pub mod entity;
pub mod grid;
pub mod hud;
pub mod interaction;
pub mod movement;
pub mod region;
pub mod world;

pub use border_blaster_types as types;

// Re-export commonly used types for convenience
pub use entity::{default_npcs, Npc, NpcRoster, Player, PLAYER_COLOR};
pub use grid::{WorldGrid, DEFAULT_LAYOUT};
pub use hud::{Hud, HudMessage};
pub use interaction::{find_adjacent_npc, find_adjacent_npc_index};
pub use movement::{attempt_direction, attempt_move};
pub use region::{RegionInfo, RegionRegistry};
pub use world::{StepOutcome, WorldState};
