//! Frame loop module.
//!
//! Glues the pure pieces together: each frame snapshots the intent flags,
//! advances the world by at most one move, redraws the whole screen and hands
//! the frame to the terminal. Single-threaded; input is drained between
//! frames, so the flags never change while a frame is running.
//!
//! - [`clock`]: fixed-interval frame deadlines
//! - [`config`]: runtime settings (`BORDER_BLASTER_*` environment variables)
//! - [`driver`]: [`FrameDriver`] (testable tick) and the interactive [`run`] loop

pub mod clock;
pub mod config;
pub mod driver;

pub use border_blaster_core as core;
pub use border_blaster_input as input;
pub use border_blaster_term as term;
pub use border_blaster_types as types;

pub use clock::FrameClock;
pub use config::RunConfig;
pub use driver::{run, FrameDriver};
