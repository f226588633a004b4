//! Frame loop scheduler
//!
//! The host owns the actual refresh callback (`requestAnimationFrame` on the
//! web, a plain loop natively). Each callback hands its timestamp to
//! [`FrameLoop::frame`], which advances the clock, runs the simulation step
//! unless paused, presents the frame and tells the host whether to schedule
//! another one.

use std::cell::Cell;
use std::rc::Rc;

use crate::game::Game;
use crate::renderer::RenderSink;

/// Scheduler lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Created, never started
    #[default]
    Idle,
    Running,
    Stopped,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule the next frame
    Continue,
    /// Loop is stopped; do not reschedule
    Stopped,
}

/// Cloneable stop switch for code that cannot borrow the loop
/// (event handlers, render sinks)
#[derive(Debug, Clone)]
pub struct LoopHandle {
    state: Rc<Cell<LoopState>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if self.state.get() == LoopState::Running {
            log::info!("Frame loop stop requested");
        }
        self.state.set(LoopState::Stopped);
    }

    pub fn is_running(&self) -> bool {
        self.state.get() == LoopState::Running
    }
}

/// Explicit frame scheduler with a start/stop contract
#[derive(Debug, Default)]
pub struct FrameLoop {
    state: Rc<Cell<LoopState>>,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the loop
    ///
    /// Resets the game clock so the first frame reports a zero delta.
    pub fn start(&mut self, game: &mut Game) {
        if self.is_running() {
            return;
        }
        game.clock.reset();
        self.state.set(LoopState::Running);
        log::info!("Frame loop started");
    }

    /// Stop the loop; no simulation step runs after this returns
    pub fn stop(&self) {
        self.handle().stop();
    }

    pub fn is_running(&self) -> bool {
        self.state.get() == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state.get()
    }

    /// A stop switch sharing this loop's state
    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            state: Rc::clone(&self.state),
        }
    }

    /// Frames executed since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at host time `now_ms`
    pub fn frame<S: RenderSink + ?Sized>(
        &mut self,
        game: &mut Game,
        now_ms: f64,
        sink: &mut S,
    ) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Stopped;
        }

        let delta_ms = game.clock.advance(now_ms);
        log::trace!("frame {} dt {:.2}ms", self.frames, delta_ms);

        // Only update game logic if not paused
        game.update();

        // Always render, so the pause state stays visible
        sink.present(&game.view());
        self.frames += 1;

        if self.is_running() {
            FrameOutcome::Continue
        } else {
            log::info!("Frame loop stopped after {} frames", self.frames);
            FrameOutcome::Stopped
        }
    }
}
