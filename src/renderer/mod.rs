//! WebGPU rendering module
//!
//! Draws the board as flat-colored triangles: one inset square per snake
//! cell and a round marker for the food.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, board_to_ndc};
pub use vertex::Vertex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to acquire GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no texture formats")]
    NoSurfaceFormat,
}
