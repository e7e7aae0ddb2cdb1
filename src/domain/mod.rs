mod buffer;
mod cell;
mod error;
mod grid;
pub mod rules;
pub mod scheduler;

pub use buffer::DoubleBuffer;
pub use cell::Cell;
pub use error::StepError;
pub use grid::Grid;
pub use rules::{count_live_neighbors, next_state};
pub use scheduler::StepScheduler;
