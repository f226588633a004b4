//! Game state and core simulation types
//!
//! Everything the simulation step mutates lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::config::GameConfig;

/// Run flags and score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Set once initialization (asset loading) has finished
    pub running: bool,
    /// Simulation is frozen while set; rendering continues
    pub paused: bool,
    score: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Whether the simulation step should run this frame
    #[inline]
    pub fn should_step(&self) -> bool {
        self.running && !self.paused
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Score only ever goes up
    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena size; the player is clamped to `[0, bounds - size]`
    pub bounds: Vec2,
    pub player: Entity,
    pub run: RunState,
}

impl GameState {
    /// Create a fresh state with the player at its spawn position
    pub fn new(config: &GameConfig) -> Self {
        let bounds = config.bounds();
        Self {
            bounds,
            player: Entity::spawn(
                bounds,
                config.player_size,
                config.player_speed,
                config.start_margin,
            ),
            run: RunState::new(),
        }
    }
}
