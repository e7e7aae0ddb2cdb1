mod command;
mod config;
mod grid_state;

pub use command::Command;
pub use config::Config;
pub use grid_state::{CommandError, GridState, Phase};
