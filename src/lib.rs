//! Board model and game-state engine for a square mine-detection puzzle.
//!
//! The engine owns the whole move state machine: randomized mine seeding,
//! adjacency counting over the 8-neighborhood, the 4-connected flood fill
//! that expands a reveal across zero-count cells, and win/loss evaluation.
//! Rendering, input, and file handling live at the boundaries: [`view`]
//! exposes a read-only per-cell view and [`snapshot`] a validated
//! serialize/restore pair.

pub use cell::*;
pub use error::*;
pub use flood::*;
pub use game::*;
pub use grid::*;
pub use types::*;

mod cell;
mod error;
mod flood;
mod game;
mod grid;
mod types;

pub mod snapshot;
pub mod view;
