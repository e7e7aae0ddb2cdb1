// Domain layer - automaton engine
pub mod domain;

// Application layer - state, commands and configuration
pub mod application;

// Infrastructure layer - rendering, input, logging
pub mod rendering;
pub mod input;
pub mod telemetry;

pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, StepError, StepScheduler};
pub use application::{Command, CommandError, Config, GridState};
pub use error::AppError;
