//! Shape generation for the 2D scene
//!
//! The scene is a flat list of filled rectangles, painted in order. Keeping
//! it as data makes the layout testable without a canvas.

use glam::Vec2;

use super::FrameView;
use crate::sim::Rect;

/// Scene palette
pub mod palette {
    pub const SKY: &str = "#87CEEB";
    pub const GRASS: &str = "#90EE90";
    pub const PATH: &str = "#8B7355";
    pub const RIVER: &str = "#4682B4";
    /// Bluey's blue
    pub const PLAYER: &str = "#4169E1";
    pub const EYES: &str = "#FFF";
    pub const NOSE: &str = "#000";
}

/// Height of the grass strips at the top and bottom edges
const GRASS_HEIGHT: f32 = 100.0;

/// Horizontal bands as (top, height, color); laid out for a 600 px arena
const PATH_BANDS: [(f32, f32, &str); 3] = [
    (150.0, 80.0, palette::PATH),
    (300.0, 80.0, palette::PATH),
    (450.0, 80.0, palette::PATH),
];
const RIVER_BANDS: [(f32, f32, &str); 2] = [
    (100.0, 50.0, palette::RIVER),
    (380.0, 70.0, palette::RIVER),
];

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub rect: Rect,
    pub color: &'static str,
}

impl FillRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, color: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
        }
    }
}

/// Sky, grass, paths and rivers covering the whole arena
pub fn background(bounds: Vec2) -> Vec<FillRect> {
    let w = bounds.x;
    let h = bounds.y;

    let mut shapes = Vec::with_capacity(8);
    // Clear
    shapes.push(FillRect::new(0.0, 0.0, w, h, palette::SKY));

    // Grass areas
    shapes.push(FillRect::new(0.0, 0.0, w, GRASS_HEIGHT, palette::GRASS));
    shapes.push(FillRect::new(0.0, h - GRASS_HEIGHT, w, GRASS_HEIGHT, palette::GRASS));

    for (top, height, color) in PATH_BANDS.into_iter().chain(RIVER_BANDS) {
        shapes.push(FillRect::new(0.0, top, w, height, color));
    }
    shapes
}

/// The player: body, eyes, nose and ears
///
/// The face offsets are tuned for a 30 px square. Ears poke 3 px above the
/// body, so they may draw outside the arena at the top edge.
pub fn player(body: &Rect) -> Vec<FillRect> {
    let (x, y) = (body.x, body.y);
    vec![
        FillRect {
            rect: *body,
            color: palette::PLAYER,
        },
        // Eyes
        FillRect::new(x + 5.0, y + 8.0, 5.0, 5.0, palette::EYES),
        FillRect::new(x + 15.0, y + 8.0, 5.0, 5.0, palette::EYES),
        // Nose
        FillRect::new(x + 12.0, y + 15.0, 3.0, 3.0, palette::NOSE),
        // Ears
        FillRect::new(x + 2.0, y - 3.0, 6.0, 8.0, palette::PLAYER),
        FillRect::new(x + 17.0, y - 3.0, 6.0, 8.0, palette::PLAYER),
    ]
}

/// Everything to paint for one frame, back to front
pub fn scene(view: &FrameView) -> Vec<FillRect> {
    let mut shapes = background(view.bounds);
    shapes.extend(player(&view.player));
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with_player(x: f32, y: f32) -> FrameView {
        FrameView {
            player: Rect::new(x, y, 30.0, 30.0),
            bounds: Vec2::new(800.0, 600.0),
            score: 0,
            paused: false,
            fps: 0,
        }
    }

    #[test]
    fn test_background_starts_with_full_clear() {
        let shapes = background(Vec2::new(800.0, 600.0));
        assert_eq!(shapes[0], FillRect::new(0.0, 0.0, 800.0, 600.0, palette::SKY));
        assert_eq!(shapes.len(), 8);
        assert!(shapes.iter().all(|s| s.rect.width == 800.0));
    }

    #[test]
    fn test_bottom_grass_follows_height() {
        let shapes = background(Vec2::new(800.0, 700.0));
        assert!(shapes.contains(&FillRect::new(0.0, 600.0, 800.0, 100.0, palette::GRASS)));
    }

    #[test]
    fn test_player_drawn_last_over_background() {
        let shapes = scene(&view_with_player(385.0, 560.0));
        let body_index = shapes
            .iter()
            .position(|s| s.rect == Rect::new(385.0, 560.0, 30.0, 30.0))
            .unwrap();
        assert_eq!(body_index, 8);
        assert_eq!(shapes.len(), 14);
        assert_eq!(shapes[body_index].color, palette::PLAYER);
    }

    #[test]
    fn test_player_features_follow_body() {
        let shapes = player(&Rect::new(100.0, 200.0, 30.0, 30.0));
        assert_eq!(shapes[3], FillRect::new(112.0, 215.0, 3.0, 3.0, palette::NOSE));
        assert_eq!(shapes[4].rect.y, 197.0);
    }
}
