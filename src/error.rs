use crate::cell::Position;
use crate::grid::Dimensions;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MazeError {
    #[error("a maze must have dimensions greater than zero, got {length}x{width}x{height}")]
    InvalidDimension {
        length: usize,
        width: usize,
        height: usize,
    },

    #[error("biases must be between 0 and 1 exclusive, got horizontal {horizontal} and vertical {vertical}")]
    InvalidBias { horizontal: f64, vertical: f64 },

    #[error("cell {position} is outside of a {dimensions} maze")]
    OutOfBounds {
        position: Position,
        dimensions: Dimensions,
    },
}
