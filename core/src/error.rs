use thiserror::Error;

/// Validation failures surfaced at the maze-building boundary.
///
/// Construction is all-or-nothing: a failed build never hands back a
/// partially carved grid or maze.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// Width or height below 1.
    #[error("invalid dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    /// Loop factor outside the accepted range.
    #[error("loop factor {0} is outside [0.0, 1.0]")]
    InvalidLoopFactor(f64),

    /// A start or end coordinate outside the grid.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Input text that does not decode to a coordinate or maze document.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
