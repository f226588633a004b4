//! Dino Adventure - A Frogger-inspired arcade game skeleton
//!
//! Core modules:
//! - `sim`: Simulation (player movement, clamping, scoring, run state)
//! - `platform`: Input latch, frame clock and the frame loop scheduler
//! - `renderer`: Render boundary and Canvas 2D painting
//! - `game`: The game context tying everything together
//! - `config`: Data-driven game configuration and key bindings

pub mod assets;
pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use assets::{AssetLoader, AssetManager};
pub use config::{GameConfig, KeyBindings};
pub use error::{GameError, Result};
pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Pixels per move, applied once per active key per frame
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Gap between the player's spawn position and the bottom edge
    pub const PLAYER_START_MARGIN: f32 = 10.0;

    /// Points awarded for each effective move
    pub const MOVE_POINTS: u64 = 1;

    /// DOM ids used by the browser shell
    pub const CANVAS_ID: &str = "gameCanvas";
    pub const SCORE_ID: &str = "score";
    pub const PAUSE_OVERLAY_ID: &str = "pauseOverlay";
}
