//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed-step movement, one step per held key per frame
//! - Hard clamping to the arena edges
//! - No rendering or platform dependencies beyond the input latch

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use entity::{Direction, Entity};
pub use state::{GameState, RunState};
pub use tick::{apply_move, tick};
