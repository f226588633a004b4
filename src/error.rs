//! Error types for Dino Adventure

use thiserror::Error;

/// The main error type for game operations
#[derive(Debug, Error)]
pub enum GameError {
    /// Canvas element or its 2D context could not be obtained
    #[error("Rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("Asset loading failed: {0}")]
    AssetLoad(String),

    #[error("Unknown direction: {0:?}")]
    UnknownDirection(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
