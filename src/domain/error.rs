use thiserror::Error;

/// Errors raised by grid and engine mutators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    InvalidCoordinate {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
}
