//! Game configuration and key bindings
//!
//! Persisted as JSON: in LocalStorage on the web, in a file named by the
//! `DINO_ADVENTURE_CONFIG` environment variable on native.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::Direction;

/// A single key mapped to a movement direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub direction: Direction,
}

impl KeyBinding {
    pub fn new(key: &str, direction: Direction) -> Self {
        Self {
            key: key.to_lowercase(),
            direction,
        }
    }
}

/// Keyboard layout
///
/// Move bindings are processed in order every frame; two keys bound to the
/// same direction held together move the player twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub moves: Vec<KeyBinding>,
    /// Key that toggles pause
    pub pause: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            moves: vec![
                // Arrow keys
                KeyBinding::new("ArrowUp", Direction::Up),
                KeyBinding::new("ArrowDown", Direction::Down),
                KeyBinding::new("ArrowLeft", Direction::Left),
                KeyBinding::new("ArrowRight", Direction::Right),
                // WASD
                KeyBinding::new("w", Direction::Up),
                KeyBinding::new("s", Direction::Down),
                KeyBinding::new("a", Direction::Left),
                KeyBinding::new("d", Direction::Right),
            ],
            pause: " ".to_string(),
        }
    }
}

impl KeyBindings {
    /// Whether `key` is the pause key (case-insensitive)
    pub fn is_pause(&self, key: &str) -> bool {
        key.to_lowercase() == self.pause.to_lowercase()
    }

    /// Whether `key` is bound to anything (move or pause)
    pub fn is_bound(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.is_pause(&key) || self.moves.iter().any(|b| b.key.to_lowercase() == key)
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena (canvas) size in pixels
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Player square side length
    pub player_size: f32,
    /// Pixels per move
    pub player_speed: f32,
    /// Spawn distance from the bottom edge
    pub start_margin: f32,

    pub bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            start_margin: PLAYER_START_MARGIN,
            bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Environment variable naming a JSON config file (native only)
    pub const CONFIG_ENV_VAR: &'static str = "DINO_ADVENTURE_CONFIG";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_adventure_config";

    /// Arena size as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    /// Reject configurations the simulation cannot honour
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.start_margin.is_finite() || self.start_margin < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "start_margin must be non-negative, got {}",
                self.start_margin
            )));
        }

        // An arena smaller than the player makes clamping undefined
        if self.canvas_width < self.player_size
            || self.canvas_height < self.player_size + self.start_margin
        {
            return Err(GameError::InvalidConfig(format!(
                "{}x{} arena cannot hold a {} px player with a {} px start margin",
                self.canvas_width, self.canvas_height, self.player_size, self.start_margin
            )));
        }

        if self.bindings.pause.is_empty() || self.bindings.moves.iter().any(|b| b.key.is_empty())
        {
            return Err(GameError::InvalidConfig(
                "key bindings must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from the file named by `DINO_ADVENTURE_CONFIG` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV_VAR) else {
            log::info!("Using default config");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bounds(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_default_bindings_order() {
        let bindings = KeyBindings::default();
        let keys: Vec<&str> = bindings.moves.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(
            keys,
            ["arrowup", "arrowdown", "arrowleft", "arrowright", "w", "s", "a", "d"]
        );
        assert!(bindings.is_pause(" "));
        assert!(bindings.is_bound("ArrowLeft"));
        assert!(bindings.is_bound("D"));
        assert!(!bindings.is_bound("q"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "player_speed": 8.0 }"#).unwrap();
        assert_eq!(config.player_speed, 8.0);
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
        assert_eq!(config.bindings, KeyBindings::default());
    }

    #[test]
    fn test_custom_bindings_from_json() {
        let json = r#"{
            "bindings": {
                "moves": [
                    { "key": "i", "direction": "up" },
                    { "key": "k", "direction": "down" }
                ],
                "pause": "p"
            }
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.bindings.moves.len(), 2);
        assert_eq!(config.bindings.moves[1].direction, Direction::Down);
        assert!(config.bindings.is_pause("P"));
    }

    #[test]
    fn test_unknown_direction_in_json_is_rejected() {
        let json = r#"{ "bindings": { "moves": [ { "key": "x", "direction": "diagonal" } ] } }"#;
        assert!(matches!(
            GameConfig::from_json(json),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_arena_smaller_than_player_is_rejected() {
        let config = GameConfig {
            canvas_width: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_non_positive_speed_is_rejected() {
        let config = GameConfig {
            player_speed: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            player_size: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_bindings() {
        let config = GameConfig::default();
        let parsed = GameConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
