//! Game state and snapshots
//!
//! Everything the loop needs between ticks lives in [`GameState`]. Renderers
//! read a [`GameSnapshot`] copy instead of the live containers.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, Grid};
use crate::consts::{DEFAULT_FOOD, DEFAULT_SNAKE};
use crate::error::GameError;

/// Starting snake, head first
pub fn default_snake() -> VecDeque<Cell> {
    DEFAULT_SNAKE.iter().copied().map(Cell::from).collect()
}

pub fn default_food() -> Cell {
    Cell::from(DEFAULT_FOOD)
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Grid bounds
    pub grid: Grid,
    /// Body cells, head first
    pub snake: VecDeque<Cell>,
    /// Requested heading for the next move
    pub direction: Direction,
    /// Heading of the last applied move
    pub moved_direction: Direction,
    /// Food cell
    pub food: Cell,
    /// Food eaten since the last reset
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh round on a `width` x `height` grid.
    ///
    /// Fails when the grid cannot hold the starting snake and food.
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        let too_small = GameError::GridTooSmall { width, height };
        let w = i32::try_from(width).map_err(|_| too_small)?;
        let h = i32::try_from(height).map_err(|_| too_small)?;
        let grid = Grid::new(w, h);

        let snake = default_snake();
        let food = default_food();
        if !snake.iter().chain(std::iter::once(&food)).all(|c| grid.contains(*c)) {
            return Err(too_small);
        }

        Ok(Self {
            grid,
            snake,
            direction: Direction::Right,
            moved_direction: Direction::Right,
            food,
            score: 0,
            time_ticks: 0,
        })
    }

    pub fn head(&self) -> Cell {
        // Never empty
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Back to the starting snake, food, heading and score
    pub fn reset_round(&mut self) {
        self.snake = default_snake();
        self.food = default_food();
        self.direction = Direction::Right;
        self.moved_direction = Direction::Right;
        self.score = 0;
    }

    /// Replace the body with `cells` (head first), for scripted setups.
    ///
    /// Every cell must be on the grid and the list non-empty.
    pub fn place_snake(&mut self, cells: &[(i32, i32)]) -> Result<(), GameError> {
        let snake: VecDeque<Cell> = cells.iter().copied().map(Cell::from).collect();
        if snake.is_empty() || !snake.iter().all(|c| self.grid.contains(*c)) {
            return Err(GameError::InvalidSnake);
        }
        self.snake = snake;
        Ok(())
    }

    /// Owned copy for renderers
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.grid.width as u32,
            height: self.grid.height as u32,
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            score: self.score,
            direction: self.direction,
        }
    }
}

/// Read-only view of one moment of play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u32,
    pub height: u32,
    /// Body cells, head first
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub direction: Direction,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(20, 20).unwrap();
        assert_eq!(
            state.snake,
            [Cell::new(8, 12), Cell::new(7, 12), Cell::new(6, 12)]
        );
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.moved_direction, Direction::Right);
        assert_eq!(state.food, Cell::new(4, 10));
        assert_eq!(state.score, 0);
        assert!(!state.occupies(state.food));
    }

    #[test]
    fn test_grid_too_small() {
        assert_eq!(
            GameState::new(8, 20),
            Err(GameError::GridTooSmall { width: 8, height: 20 })
        );
        assert!(GameState::new(20, 12).is_err());
        assert!(GameState::new(9, 13).is_ok());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = GameState::new(20, 20).unwrap();
        let snap = state.snapshot();
        state.snake.pop_back();
        state.score = 9;
        assert_eq!(snap.snake.len(), 3);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.head(), Some(Cell::new(8, 12)));
    }

    #[test]
    fn test_place_snake_rejects_off_grid() {
        let mut state = GameState::new(20, 20).unwrap();
        assert!(state.place_snake(&[(20, 0)]).is_err());
        assert!(state.place_snake(&[]).is_err());
        assert!(state.place_snake(&[(1, 1), (1, 2)]).is_ok());
        assert_eq!(state.head(), Cell::new(1, 1));
        assert_eq!(state.len(), 2);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_reset_round() {
        let mut state = GameState::new(20, 20).unwrap();
        state.place_snake(&[(1, 1), (1, 2), (1, 3), (1, 4)]).unwrap();
        state.direction = Direction::Up;
        state.moved_direction = Direction::Up;
        state.score = 4;
        state.food = Cell::new(0, 0);

        state.reset_round();
        assert_eq!(state.snake, default_snake());
        assert_eq!(state.food, default_food());
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.moved_direction, Direction::Right);
        assert_eq!(state.score, 0);
    }
}
