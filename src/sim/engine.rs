//! Engine facade for runners
//!
//! Wraps an optional [`GameState`] plus its food source and enforces that
//! nothing runs before `initialize`.

use super::food::{FoodSource, SeededFood};
use super::grid::Direction;
use super::state::{GameSnapshot, GameState};
use super::tick::{TickOutcome, set_direction, tick};
use crate::error::GameError;

pub struct SnakeEngine<F = SeededFood> {
    state: Option<GameState>,
    food_source: F,
}

impl SnakeEngine<SeededFood> {
    /// Engine with a seeded PCG food source
    pub fn seeded(seed: u64) -> Self {
        let food_source = SeededFood::new(seed);
        log::debug!("Food source seeded with {}", food_source.seed());
        Self::new(food_source)
    }
}

impl<F: FoodSource> SnakeEngine<F> {
    /// Uninitialized engine; call [`initialize`](Self::initialize) first
    pub fn new(food_source: F) -> Self {
        Self {
            state: None,
            food_source,
        }
    }

    /// Start a fresh round on a `width` x `height` grid
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<(), GameError> {
        let state = GameState::new(width, height)?;
        log::info!("Snake initialized on a {}x{} grid", width, height);
        self.state = Some(state);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        let state = self.state.as_mut().ok_or(GameError::NotInitialized)?;
        Ok(tick(state, &mut self.food_source))
    }

    /// Request a turn; reversals are ignored and report `Ok(false)`
    pub fn set_direction(&mut self, requested: Direction) -> Result<bool, GameError> {
        let state = self.state.as_mut().ok_or(GameError::NotInitialized)?;
        Ok(set_direction(state, requested))
    }

    /// Request a turn from a raw step vector such as `(0, -1)`
    pub fn set_direction_vector(&mut self, dx: i32, dy: i32) -> Result<bool, GameError> {
        let requested = Direction::from_delta(dx, dy)?;
        self.set_direction(requested)
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, GameError> {
        self.state
            .as_ref()
            .map(GameState::snapshot)
            .ok_or(GameError::NotInitialized)
    }

    /// Borrow the live state, e.g. for the autopilot
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }
}
