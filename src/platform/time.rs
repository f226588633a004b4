//! Frame clock
//!
//! Tracks the host timestamp of the previous frame and the elapsed time
//! since then, plus a rolling FPS estimate.

/// Number of frames in the FPS window
pub const FPS_WINDOW: usize = 60;

/// Per-frame timing
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Host timestamp (ms) of the previous frame, `None` before the first
    last_timestamp: Option<f64>,
    /// Elapsed ms between the last two frames
    delta_ms: f64,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames: u64,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            last_timestamp: None,
            delta_ms: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames: 0,
            fps: 0,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all history; the next frame counts as the first
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a frame at host time `now_ms` and return the elapsed ms
    ///
    /// The first frame after a reset has no predecessor and reports 0.
    /// Timestamps that go backwards also report 0, never a negative delta.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            // f64::max drops NaN
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        self.delta_ms = delta;
        self.track_fps(now_ms);
        delta
    }

    fn track_fps(&mut self, now_ms: f64) {
        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames += 1;

        // Once the window is full, the slot we'll overwrite next is the oldest
        if self.frames >= FPS_WINDOW as u64 {
            let oldest = self.frame_times[self.frame_index];
            let elapsed = now_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    pub fn delta_secs(&self) -> f32 {
        (self.delta_ms / 1000.0) as f32
    }

    /// Frames recorded since the last reset
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Rolling FPS over the last `FPS_WINDOW` frames (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        // A large host timestamp must not turn into a huge first delta
        assert_eq!(clock.advance(123_456.0), 0.0);
        assert_eq!(clock.last_timestamp(), Some(123_456.0));
    }

    #[test]
    fn test_delta_between_frames() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(1016.0), 16.0);
        assert_eq!(clock.delta_ms(), 16.0);
        assert!((clock.delta_secs() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0.0);
        // Measured from the new (earlier) timestamp afterwards
        assert_eq!(clock.advance(910.0), 10.0);
    }

    #[test]
    fn test_reset_restarts_from_first_frame() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        clock.advance(16.0);
        clock.reset();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.advance(5000.0), 0.0);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        for i in 0..FPS_WINDOW {
            assert_eq!(clock.fps(), 0);
            clock.advance(i as f64 * 20.0);
        }
        assert_eq!(clock.fps(), 50);

        // Window keeps rolling
        for i in FPS_WINDOW..FPS_WINDOW * 2 {
            clock.advance(i as f64 * 20.0);
        }
        assert_eq!(clock.fps(), 50);
    }
}
