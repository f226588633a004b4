//! Game context
//!
//! One explicit value holding the simulation state, the input latch, the
//! frame clock and the key bindings. Hosts own it and pass it to the frame
//! loop; nothing here is global.

use crate::assets::AssetLoader;
use crate::config::{GameConfig, KeyBindings};
use crate::error::Result;
use crate::platform::{FrameClock, InputLatch};
use crate::renderer::FrameView;
use crate::sim::{GameState, tick};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: InputLatch,
    pub clock: FrameClock,
    pub bindings: KeyBindings,
}

impl Game {
    /// Build a game from a validated config; not yet running
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config),
            input: InputLatch::new(),
            clock: FrameClock::new(),
            bindings: config.bindings.clone(),
        })
    }

    /// Build the game, wait for assets, and mark it running
    pub async fn init<L: AssetLoader>(config: &GameConfig, assets: &mut L) -> Result<Self> {
        let mut game = Self::new(config)?;
        assets.load_assets().await?;
        game.state.run.running = true;
        log::info!(
            "Dino Adventure initialized ({}x{})",
            config.canvas_width,
            config.canvas_height
        );
        Ok(game)
    }

    /// Key pressed. Auto-repeat presses update the latch but never toggle
    /// pause.
    pub fn key_down(&mut self, key: &str, repeat: bool) {
        self.input.set_key(key, true);
        if !repeat && self.bindings.is_pause(key) {
            self.toggle_pause();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.set_key(key, false);
    }

    /// Flip between paused and playing, returning the new pause state
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.state.run.toggle_pause();
        log::info!("{}", if paused { "Paused" } else { "Resumed" });
        paused
    }

    /// Run the simulation step unless paused or not yet running
    ///
    /// Returns the number of effective moves.
    pub fn update(&mut self) -> u32 {
        if !self.state.run.should_step() {
            return 0;
        }
        tick(&mut self.state, &self.input, &self.bindings)
    }

    pub fn score(&self) -> u64 {
        self.state.run.score()
    }

    /// Snapshot for the render sink
    pub fn view(&self) -> FrameView {
        FrameView {
            player: self.state.player.rect(),
            bounds: self.state.bounds,
            score: self.state.run.score(),
            paused: self.state.run.paused,
            fps: self.clock.fps(),
        }
    }
}
