//! Platform abstraction layer
//!
//! Host-facing pieces that are the same on browser and native:
//! - Time/frame deltas
//! - Input events (key latch)
//! - The frame loop scheduler

pub mod frame_loop;
pub mod input;
pub mod time;

pub use frame_loop::{FrameLoop, FrameOutcome, LoopHandle, LoopState};
pub use input::InputLatch;
pub use time::FrameClock;
