//! Food placement
//!
//! Random cells are proposed until one is off the snake. After
//! `MAX_FOOD_ATTEMPTS` misses the free cells are listed explicitly and one is
//! picked from that list, so dense boards cannot loop forever.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::{Cell, Grid};
use crate::consts::MAX_FOOD_ATTEMPTS;

/// Uniform random source for food placement
pub trait FoodSource {
    /// A uniformly random cell of `grid`
    fn propose(&mut self, grid: &Grid) -> Cell;

    /// A uniformly random index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Seeded PCG source, reproducible for a given seed
#[derive(Debug, Clone)]
pub struct SeededFood {
    seed: u64,
    rng: Pcg32,
}

impl SeededFood {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl FoodSource for SeededFood {
    fn propose(&mut self, grid: &Grid) -> Cell {
        Cell::new(
            self.rng.random_range(0..grid.width),
            self.rng.random_range(0..grid.height),
        )
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Choose a food cell not covered by `snake`.
///
/// Returns `None` only when the snake fills the whole grid.
pub fn spawn_food<'a, F>(
    grid: &Grid,
    snake: impl IntoIterator<Item = &'a Cell>,
    source: &mut F,
) -> Option<Cell>
where
    F: FoodSource + ?Sized,
{
    let occupied: HashSet<Cell> = snake.into_iter().copied().collect();
    if occupied.len() >= grid.cell_count() {
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let cell = grid.wrap(source.propose(grid));
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|c| !occupied.contains(c)).collect();
    log::debug!(
        "Food sampling missed {} times, picking from {} free cells",
        MAX_FOOD_ATTEMPTS,
        free.len()
    );
    free.get(source.pick(free.len())).copied()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed proposals, then repeats the last one forever
    pub(crate) struct ScriptedFood {
        cells: VecDeque<Cell>,
        last: Cell,
        pub proposals: usize,
    }

    impl ScriptedFood {
        pub(crate) fn new(cells: &[(i32, i32)]) -> Self {
            let cells: VecDeque<Cell> = cells.iter().copied().map(Cell::from).collect();
            let last = cells.back().copied().unwrap_or(Cell::new(0, 0));
            Self {
                cells,
                last,
                proposals: 0,
            }
        }
    }

    impl FoodSource for ScriptedFood {
        fn propose(&mut self, _grid: &Grid) -> Cell {
            self.proposals += 1;
            if let Some(cell) = self.cells.pop_front() {
                self.last = cell;
            }
            self.last
        }

        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn snake(cells: &[(i32, i32)]) -> Vec<Cell> {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_resamples_until_free() {
        let grid = Grid::new(20, 20);
        let body = snake(&[(8, 12), (7, 12), (6, 12)]);
        let mut source = ScriptedFood::new(&[(7, 12), (8, 12), (3, 3)]);

        let food = spawn_food(&grid, &body, &mut source);
        assert_eq!(food, Some(Cell::new(3, 3)));
        assert_eq!(source.proposals, 3);
    }

    #[test]
    fn test_falls_back_to_free_list() {
        let grid = Grid::new(2, 2);
        let body = snake(&[(0, 0), (1, 0), (1, 1)]);
        // Always proposes an occupied cell
        let mut source = ScriptedFood::new(&[(0, 0)]);

        let food = spawn_food(&grid, &body, &mut source);
        assert_eq!(food, Some(Cell::new(0, 1)));
        assert_eq!(source.proposals, MAX_FOOD_ATTEMPTS as usize);
    }

    #[test]
    fn test_full_board_has_no_food() {
        let grid = Grid::new(2, 1);
        let body = snake(&[(0, 0), (1, 0)]);
        let mut source = SeededFood::new(1);
        assert_eq!(spawn_food(&grid, &body, &mut source), None);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let grid = Grid::new(20, 20);
        let mut a = SeededFood::new(42);
        let mut b = SeededFood::new(42);
        assert_eq!(a.seed(), 42);
        for _ in 0..32 {
            let cell = a.propose(&grid);
            assert!(grid.contains(cell));
            assert_eq!(cell, b.propose(&grid));
        }
    }

    #[test]
    fn test_seeded_food_never_on_snake() {
        let grid = Grid::new(5, 5);
        let body: Vec<Cell> = grid.cells().take(20).collect();
        let mut source = SeededFood::new(7);
        for _ in 0..100 {
            let food = spawn_food(&grid, &body, &mut source).unwrap();
            assert!(!body.contains(&food));
        }
    }
}
