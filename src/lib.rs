//! Border Blaster (workspace facade crate).
//!
//! Re-exports the `border_blaster::{core,engine,input,term,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use border_blaster_core as core;
pub use border_blaster_engine as engine;
pub use border_blaster_input as input;
pub use border_blaster_term as term;
pub use border_blaster_types as types;
