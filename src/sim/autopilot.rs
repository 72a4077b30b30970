//! Idle/demo mode: a greedy driver that plays the game by itself

use super::grid::{Cell, Direction, Grid};
use super::state::GameState;

/// Shortest distance between two cells on a wrapping grid
pub fn wrapped_distance(grid: &Grid, a: Cell, b: Cell) -> i32 {
    let dx = (a.x - b.x).rem_euclid(grid.width);
    let dy = (a.y - b.y).rem_euclid(grid.height);
    dx.min(grid.width - dx) + dy.min(grid.height - dy)
}

/// Pick the heading that closes in on the food without biting the body.
///
/// Falls back to the current heading when every turn is blocked.
pub fn choose_direction(state: &GameState) -> Direction {
    let head = state.head();
    Direction::ALL
        .into_iter()
        .filter(|dir| {
            !dir.is_opposite(state.direction) && !dir.is_opposite(state.moved_direction)
        })
        .filter_map(|dir| {
            let next = state.grid.step(head, dir);
            if state.occupies(next) {
                return None;
            }
            // Straight beats a turn at equal distance
            let turn_cost = i32::from(dir != state.direction);
            Some((wrapped_distance(&state.grid, next, state.food) * 2 + turn_cost, dir))
        })
        .min_by_key(|(cost, _)| *cost)
        .map(|(_, dir)| dir)
        .unwrap_or(state.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::food::SeededFood;
    use crate::sim::tick::{TickOutcome, set_direction, tick};

    #[test]
    fn test_wrapped_distance_uses_short_way() {
        let grid = Grid::new(20, 20);
        assert_eq!(wrapped_distance(&grid, Cell::new(0, 0), Cell::new(19, 0)), 1);
        assert_eq!(wrapped_distance(&grid, Cell::new(2, 3), Cell::new(5, 1)), 5);
        assert_eq!(wrapped_distance(&grid, Cell::new(4, 4), Cell::new(4, 4)), 0);
    }

    #[test]
    fn test_heads_toward_food() {
        let mut state = GameState::new(20, 20).unwrap();
        state.food = Cell::new(8, 5);
        assert_eq!(choose_direction(&state), Direction::Up);

        state.food = Cell::new(15, 12);
        assert_eq!(choose_direction(&state), Direction::Right);
    }

    #[test]
    fn test_never_reverses() {
        let mut state = GameState::new(20, 20).unwrap();
        // Food straight behind the head
        state.food = Cell::new(2, 12);
        assert_ne!(choose_direction(&state), Direction::Left);
    }

    #[test]
    fn test_avoids_body() {
        let mut state = GameState::new(20, 20).unwrap();
        // Moving up with body to the left; food to the left
        state
            .place_snake(&[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)])
            .unwrap();
        state.direction = Direction::Up;
        state.food = Cell::new(1, 5);
        let dir = choose_direction(&state);
        assert_ne!(dir, Direction::Left);
        assert!(!state.occupies(state.grid.step(state.head(), dir)));
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(20, 20).unwrap();
        let mut food = SeededFood::new(5);
        let mut eaten = 0;
        for _ in 0..400 {
            let dir = choose_direction(&state);
            set_direction(&mut state, dir);
            if let TickOutcome::Ate { .. } = tick(&mut state, &mut food) {
                eaten += 1;
            }
        }
        assert!(eaten >= 5, "autopilot only ate {eaten} times");
    }
}
