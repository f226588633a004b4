//! Input latch
//!
//! Event handlers write key state here whenever the host delivers a key
//! event; the simulation step reads it once per frame. Key identifiers are
//! lowercased on the way in and on lookup, so `"ArrowUp"` and `"arrowup"`
//! are the same key.

use std::collections::HashMap;

/// Latest pressed/released state per key
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    keys: HashMap<String, bool>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn normalize(key: &str) -> String {
        key.to_lowercase()
    }

    /// Record the latest state of `key`
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        self.keys.insert(Self::normalize(key), pressed);
    }

    /// Latest recorded state of `key`, `false` if never seen
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys
            .get(&Self::normalize(key))
            .copied()
            .unwrap_or(false)
    }

    /// Mark every known key released (e.g. when the window loses focus)
    ///
    /// Entries are kept, only their state changes.
    pub fn release_all(&mut self) {
        for pressed in self.keys.values_mut() {
            *pressed = false;
        }
    }

    /// Number of keys currently held
    pub fn pressed_count(&self) -> usize {
        self.keys.values().filter(|p| **p).count()
    }
}
