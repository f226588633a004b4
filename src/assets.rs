//! Asset loading
//!
//! The game awaits its loader once, before the first frame. There are no
//! sprites or sounds yet, so the bundled manager only records that loading
//! happened.

use crate::error::Result;

/// Anything that must finish loading before the game starts
pub trait AssetLoader {
    /// Load all assets; an error aborts startup
    fn load_assets(&mut self) -> impl Future<Output = Result<()>>;
}

/// Default asset manager (nothing to load yet)
#[derive(Debug, Default)]
pub struct AssetManager {
    loaded: bool,
}

impl AssetManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl AssetLoader for AssetManager {
    async fn load_assets(&mut self) -> Result<()> {
        log::info!("Asset loading system initialized (no sprite or sound files yet)");
        self.loaded = true;
        Ok(())
    }
}
