//! Grid geometry: cells, directions and toroidal wrapping

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Heading of the snake. Screen coordinates: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step (dx, dy)
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse a raw step vector; anything but the four unit steps is rejected
    pub fn from_delta(dx: i32, dy: i32) -> Result<Self, GameError> {
        match (dx, dy) {
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            _ => Err(GameError::InvalidDirection { dx, dy }),
        }
    }
}

/// Grid bounds. Every edge wraps to the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Fold any coordinate back onto the grid
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    /// Neighbour of `cell` one step toward `dir`, wrapping at the edges
    pub fn step(&self, cell: Cell, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        self.wrap(Cell::new(cell.x + dx, cell.y + dy))
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_right_edge() {
        let grid = Grid::new(20, 20);
        assert_eq!(grid.step(Cell::new(19, 5), Direction::Right), Cell::new(0, 5));
    }

    #[test]
    fn test_wrap_left_edge() {
        let grid = Grid::new(20, 20);
        assert_eq!(grid.step(Cell::new(0, 5), Direction::Left), Cell::new(19, 5));
    }

    #[test]
    fn test_wrap_vertical_edges() {
        let grid = Grid::new(20, 15);
        assert_eq!(grid.step(Cell::new(3, 0), Direction::Up), Cell::new(3, 14));
        assert_eq!(grid.step(Cell::new(3, 14), Direction::Down), Cell::new(3, 0));
    }

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_from_delta_rejects_non_unit() {
        assert_eq!(Direction::from_delta(0, 1), Ok(Direction::Down));
        assert_eq!(
            Direction::from_delta(1, 1),
            Err(GameError::InvalidDirection { dx: 1, dy: 1 })
        );
        assert!(Direction::from_delta(0, 0).is_err());
        assert!(Direction::from_delta(2, 0).is_err());
    }

    #[test]
    fn test_cells_covers_grid() {
        let grid = Grid::new(4, 3);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert!(cells.iter().all(|c| grid.contains(*c)));
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    proptest! {
        #[test]
        fn step_stays_on_grid(
            w in 1i32..40,
            h in 1i32..40,
            x in 0i32..40,
            y in 0i32..40,
            dir in any_direction(),
        ) {
            let grid = Grid::new(w, h);
            let cell = Cell::new(x % w, y % h);
            prop_assert!(grid.contains(grid.step(cell, dir)));
        }

        #[test]
        fn step_back_returns_home(
            w in 1i32..40,
            h in 1i32..40,
            x in 0i32..40,
            y in 0i32..40,
            dir in any_direction(),
        ) {
            let grid = Grid::new(w, h);
            let cell = Cell::new(x % w, y % h);
            let there = grid.step(cell, dir);
            prop_assert_eq!(grid.step(there, dir.opposite()), cell);
        }
    }
}
