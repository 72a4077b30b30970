//! Single-step simulation
//!
//! Core game loop that advances the snake one cell per call.

use super::food::{FoodSource, spawn_food};
use super::grid::{Cell, Direction};
use super::state::GameState;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Head advanced, tail followed
    Moved,
    /// Head landed on food; the snake grew and food moved to `next_food`
    Ate { next_food: Cell },
    /// Head would have bitten the body (or the board is full); round restarted
    Reset { final_score: u32 },
}

/// Advance the game state by one step
pub fn tick<F>(state: &mut GameState, food_source: &mut F) -> TickOutcome
where
    F: FoodSource + ?Sized,
{
    debug_assert!(!state.is_empty());
    state.time_ticks += 1;

    let new_head = state.grid.step(state.head(), state.direction);

    // Self-collision: the move is dropped and the defaults take its place
    if state.occupies(new_head) {
        let final_score = state.score;
        log::debug!(
            "Bit own body at ({}, {}) with length {}, score {} lost",
            new_head.x,
            new_head.y,
            state.len(),
            final_score
        );
        state.reset_round();
        return TickOutcome::Reset { final_score };
    }

    state.snake.push_front(new_head);
    state.moved_direction = state.direction;

    if new_head != state.food {
        state.snake.pop_back();
        return TickOutcome::Moved;
    }

    state.score += 1;
    match spawn_food(&state.grid, &state.snake, food_source) {
        Some(next_food) => {
            state.food = next_food;
            log::debug!(
                "Ate food at ({}, {}), score {}, next food at ({}, {})",
                new_head.x,
                new_head.y,
                state.score,
                next_food.x,
                next_food.y
            );
            TickOutcome::Ate { next_food }
        }
        None => {
            let final_score = state.score;
            log::info!("Board filled with score {}, starting over", final_score);
            state.reset_round();
            TickOutcome::Reset { final_score }
        }
    }
}

/// Turn the snake unless `requested` points straight back.
///
/// Returns whether the heading changed. Reversal requests are dropped
/// silently. A request is a reversal when it opposes either the pending
/// heading or the heading of the last move, so two quick turns between
/// ticks cannot fold the head back onto the neck.
pub fn set_direction(state: &mut GameState, requested: Direction) -> bool {
    if requested == state.direction
        || requested.is_opposite(state.direction)
        || requested.is_opposite(state.moved_direction)
    {
        return false;
    }
    state.direction = requested;
    true
}
