//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One grid step per tick
//! - Seeded or injected randomness only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;
pub mod tick;

pub use autopilot::{choose_direction, wrapped_distance};
pub use engine::SnakeEngine;
pub use food::{FoodSource, SeededFood, spawn_food};
pub use grid::{Cell, Direction, Grid};
pub use state::{GameSnapshot, GameState, default_food, default_snake};
pub use tick::{TickOutcome, set_direction, tick};
