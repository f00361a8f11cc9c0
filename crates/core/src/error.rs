use thiserror::Error;

/// Error type for grid and seeding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("failed to allocate memory for a {width}x{height} grid")]
    Allocation { width: usize, height: usize },
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: usize, height: usize },
    #[error("grid data not initialized")]
    Uninitialized,
    #[error("{pattern} needs at least an {min}x{min} grid (got {width}x{height})")]
    GridTooSmall {
        pattern: &'static str,
        min: usize,
        width: usize,
        height: usize,
    },
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },
}
