//! Wrap Snake - Snake on a toroidal grid
//!
//! Core modules:
//! - `sim`: Deterministic game loop (snake, food, score, tick)
//! - `input`: Key names to direction requests
//! - `renderer`: WebGPU pipeline drawing flat grid cells
//! - `settings`: Grid and timing configuration

pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default grid width in cells
    pub const GRID_WIDTH: u32 = 20;
    /// Default grid height in cells
    pub const GRID_HEIGHT: u32 = 20;
    /// Default cell edge length in pixels
    pub const CELL_SIZE: u32 = 32;
    /// Milliseconds between ticks
    pub const TICK_INTERVAL_MS: u32 = 250;

    /// Starting snake, head first
    pub const DEFAULT_SNAKE: [(i32, i32); 3] = [(8, 12), (7, 12), (6, 12)];
    /// Starting food cell
    pub const DEFAULT_FOOD: (i32, i32) = (4, 10);

    /// Random proposals tried before falling back to the free-cell list
    pub const MAX_FOOD_ATTEMPTS: u32 = 256;
}
