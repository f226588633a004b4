//! Simulation step
//!
//! Polls the input latch through the key bindings and moves the player once
//! per held binding. Delta time is not used: movement is a fixed step per
//! frame.

use super::entity::Direction;
use super::state::GameState;
use crate::config::KeyBindings;
use crate::consts::MOVE_POINTS;
use crate::platform::InputLatch;

/// Move the player one step and award a point if it actually moved
///
/// Returns whether the move was effective. A move blocked by the arena
/// edge awards nothing.
pub fn apply_move(state: &mut GameState, direction: Direction) -> bool {
    let moved = state.player.move_in(direction, state.bounds);
    if moved {
        state.run.add_score(MOVE_POINTS);
    }
    moved
}

/// Advance the game state by one frame
///
/// Every held move binding is applied in binding order, so holding two keys
/// can score twice in one frame. Returns the number of effective moves.
pub fn tick(state: &mut GameState, input: &InputLatch, bindings: &KeyBindings) -> u32 {
    let mut moves = 0;
    for binding in &bindings.moves {
        if input.is_pressed(&binding.key) && apply_move(state, binding.direction) {
            moves += 1;
        }
    }

    if moves > 0 {
        log::trace!(
            "player at ({}, {}), score {}",
            state.player.pos.x,
            state.player.pos.y,
            state.run.score()
        );
    }

    moves
}
