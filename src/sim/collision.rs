//! Axis-aligned rectangle overlap
//!
//! Not used by the frame loop yet; obstacles will be checked against the
//! player with this once they exist.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True if the two rectangles overlap
    ///
    /// Edges are half-open, so rectangles that only share an edge or a
    /// corner do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Check whether two rectangles overlap
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_touch_is_not_a_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
        assert!(!rects_overlap(&b, &a));
    }

    #[test]
    fn test_edge_touch_is_not_a_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_containment() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x, far apart on y
        let b = Rect::new(5.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_from_pos_size() {
        let r = Rect::from_pos_size(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
    }
}
