//! Shape generation for the board
//!
//! All positions are board pixels: origin top-left, y down.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{Cell, GameSnapshot};

/// Gap between a snake cell and its neighbours, in pixels
pub const SNAKE_PADDING: f32 = 2.0;
/// Segments used to approximate the round food
pub const FOOD_SEGMENTS: u32 = 16;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Top-left corner of `cell` in pixels
pub fn cell_origin(cell: Cell, cell_size: f32) -> Vec2 {
    Vec2::new(cell.x as f32, cell.y as f32) * cell_size
}

/// Inset square covering one snake cell
pub fn snake_cell(cell: Cell, cell_size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let origin = cell_origin(cell, cell_size);
    let inset = Vec2::splat(SNAKE_PADDING.min(cell_size / 4.0));
    rect(origin + inset, origin + Vec2::splat(cell_size) - inset, color)
}

/// Round marker centred in the food cell
pub fn food_cell(cell: Cell, cell_size: f32) -> Vec<Vertex> {
    let center = cell_origin(cell, cell_size) + Vec2::splat(cell_size / 2.0);
    circle(center, cell_size / 2.0, colors::FOOD, FOOD_SEGMENTS)
}

/// Every triangle needed to draw one snapshot
pub fn board(snapshot: &GameSnapshot, cell_size: f32) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity(snapshot.snake.len() * 6 + FOOD_SEGMENTS as usize * 3);

    vertices.extend(food_cell(snapshot.food, cell_size));
    for (i, cell) in snapshot.snake.iter().enumerate() {
        let color = if i == 0 {
            colors::SNAKE_HEAD
        } else {
            colors::SNAKE
        };
        vertices.extend(snake_cell(*cell, cell_size, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_snake_cell_is_inset() {
        let verts = snake_cell(Cell::new(2, 3), 32.0, colors::SNAKE);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[0] >= 64.0 + SNAKE_PADDING);
            assert!(v.position[0] <= 96.0 - SNAKE_PADDING);
            assert!(v.position[1] >= 96.0 + SNAKE_PADDING);
            assert!(v.position[1] <= 128.0 - SNAKE_PADDING);
        }
    }

    #[test]
    fn test_food_stays_inside_cell() {
        let verts = food_cell(Cell::new(1, 1), 32.0);
        assert_eq!(verts.len(), FOOD_SEGMENTS as usize * 3);
        for v in &verts {
            assert!((32.0 - 0.01..=64.01).contains(&v.position[0]));
            assert!((32.0 - 0.01..=64.01).contains(&v.position[1]));
            assert_eq!(v.color, colors::FOOD);
        }
    }

    #[test]
    fn test_board_counts_and_head_color() {
        let snapshot = GameState::new(20, 20).unwrap().snapshot();
        let verts = board(&snapshot, 32.0);
        let food_verts = FOOD_SEGMENTS as usize * 3;
        assert_eq!(verts.len(), food_verts + 3 * 6);
        assert_eq!(verts[food_verts].color, colors::SNAKE_HEAD);
        assert_eq!(verts[food_verts + 6].color, colors::SNAKE);
    }
}
