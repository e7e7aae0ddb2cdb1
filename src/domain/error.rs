use thiserror::Error;

/// Faults raised while computing a generation.
/// Any of these aborts the advance; the next buffer is never committed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("buffer size mismatch: current is {current}x{current}, next is {next}x{next}")]
    SizeMismatch { current: usize, next: usize },
}
