//! Movable entity: a positioned rectangle with a fixed step size
//!
//! Movement is applied in whole steps of `speed` pixels, then each axis is
//! clamped independently to `[0, bound - size]`. Clamping saturates: an
//! entity pushed into a wall stays pinned there, it never bounces.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::error::GameError;

/// Movement direction in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GameError::UnknownDirection(s.to_string())),
        }
    }
}

/// A movable axis-aligned entity (the player)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Pixels moved per step
    pub speed: f32,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    /// Spawn a square entity horizontally centred, `margin` pixels above the
    /// bottom edge of `bounds`
    pub fn spawn(bounds: Vec2, size: f32, speed: f32, margin: f32) -> Self {
        let pos = Vec2::new(bounds.x / 2.0 - size / 2.0, bounds.y - size - margin);
        Self::new(pos, Vec2::splat(size), speed)
    }

    /// Largest valid top-left position inside `bounds`
    ///
    /// Negative on an axis where `bounds` is smaller than the entity. Such
    /// bounds are invalid input and the result of clamping is undefined.
    #[inline]
    pub fn max_pos(&self, bounds: Vec2) -> Vec2 {
        bounds - self.size
    }

    /// Clamp the position into `bounds`, floor first, then ceiling
    pub fn clamp_to(&mut self, bounds: Vec2) {
        // Not Vec2::clamp: it asserts min <= max, and degenerate bounds must
        // not panic.
        self.pos = self.pos.max(Vec2::ZERO).min(self.max_pos(bounds));
    }

    /// Move one step in `direction`, then clamp into `bounds`
    ///
    /// Returns `true` if the position actually changed. A step taken while
    /// pinned against the wall in that direction returns `false`.
    pub fn move_in(&mut self, direction: Direction, bounds: Vec2) -> bool {
        let prev = self.pos;
        self.pos += direction.unit() * self.speed;
        self.clamp_to(bounds);
        self.pos != prev
    }

    /// Bounding rectangle for collision checks and rendering
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn player_at(x: f32, y: f32) -> Entity {
        Entity::new(Vec2::new(x, y), Vec2::splat(30.0), 4.0)
    }

    #[test]
    fn test_spawn_position() {
        let player = Entity::spawn(BOUNDS, 30.0, 4.0, 10.0);
        assert_eq!(player.pos, Vec2::new(385.0, 560.0));
        assert_eq!(player.size, Vec2::splat(30.0));
    }

    #[test]
    fn test_move_right_steps_by_speed() {
        let mut player = player_at(400.0, 560.0);
        assert!(player.move_in(Direction::Right, BOUNDS));
        assert_eq!(player.pos, Vec2::new(404.0, 560.0));
    }

    #[test]
    fn test_each_direction_moves_along_its_axis() {
        for dir in Direction::ALL {
            let mut player = player_at(100.0, 100.0);
            assert!(player.move_in(dir, BOUNDS), "{dir} should move");
            assert_eq!(player.pos, Vec2::new(100.0, 100.0) + dir.unit() * 4.0);
        }
    }

    #[test]
    fn test_blocked_at_left_wall() {
        let mut player = player_at(0.0, 300.0);
        assert!(!player.move_in(Direction::Left, BOUNDS));
        assert_eq!(player.pos, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_clamps_to_right_edge() {
        // 2 pixels short of the edge: the step is cut short, still a move
        let mut player = player_at(768.0, 560.0);
        assert!(player.move_in(Direction::Right, BOUNDS));
        assert_eq!(player.pos.x, 770.0);

        // Already at the edge: nothing changes
        assert!(!player.move_in(Direction::Right, BOUNDS));
        assert_eq!(player.pos.x, 770.0);
    }

    #[test]
    fn test_clamps_to_top_and_bottom() {
        let mut player = player_at(10.0, 2.0);
        assert!(player.move_in(Direction::Up, BOUNDS));
        assert_eq!(player.pos.y, 0.0);

        let mut player = player_at(10.0, 569.0);
        assert!(player.move_in(Direction::Down, BOUNDS));
        assert_eq!(player.pos.y, 570.0);
    }

    #[test]
    fn test_degenerate_bounds_are_not_fixed_up() {
        // Arena narrower than the entity: the ceiling wins and goes negative
        let mut player = player_at(0.0, 0.0);
        player.move_in(Direction::Left, Vec2::new(20.0, 600.0));
        assert_eq!(player.pos.x, -10.0);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(GameError::UnknownDirection(token)) if token == "sideways"
        ));
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_move_stays_in_bounds(
            x in -200.0f32..1000.0,
            y in -200.0f32..800.0,
            dirs in prop::collection::vec(any_direction(), 1..64),
        ) {
            let mut player = player_at(x, y);
            for dir in dirs {
                player.move_in(dir, BOUNDS);
                prop_assert!(player.pos.x >= 0.0 && player.pos.x <= 770.0);
                prop_assert!(player.pos.y >= 0.0 && player.pos.y <= 570.0);
            }
        }

        #[test]
        fn prop_pinned_position_is_stable(
            x in 0.0f32..=770.0,
            y in 0.0f32..=570.0,
            dir in any_direction(),
        ) {
            let mut player = player_at(x, y);
            // Enough steps to cross the whole arena
            for _ in 0..250 {
                player.move_in(dir, BOUNDS);
            }
            let pinned = player.pos;
            prop_assert!(!player.move_in(dir, BOUNDS));
            prop_assert_eq!(player.pos, pinned);
        }
    }
}
