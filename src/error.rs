//! Engine contract violations
//!
//! Self-collision is gameplay, not an error; it shows up as
//! [`TickOutcome::Reset`](crate::sim::TickOutcome::Reset).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// An engine call arrived before `initialize`
    #[error("engine used before initialize()")]
    NotInitialized,

    /// The grid cannot hold the starting snake and food
    #[error("grid {width}x{height} is too small for the starting snake and food")]
    GridTooSmall { width: u32, height: u32 },

    /// A scripted body that is empty or leaves the grid
    #[error("snake must be non-empty and lie on the grid")]
    InvalidSnake,

    /// A direction vector that is not one of the four unit steps
    #[error("({dx}, {dy}) is not a unit direction")]
    InvalidDirection { dx: i32, dy: i32 },
}
