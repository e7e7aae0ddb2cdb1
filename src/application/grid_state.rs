use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::{Command, Config};
use crate::domain::{Cell, DoubleBuffer, Grid, StepError, StepScheduler};

/// Whether a generation advance is in flight.
/// A phase stuck at `Advancing` means an advance unwound mid-flight.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Advancing,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("a generation advance is in flight or was interrupted")]
    Busy,
    #[error(transparent)]
    Step(#[from] StepError),
}

/// GridState orchestrates the simulation.
/// This is the application layer that coordinates domain logic; the
/// control loop owns exactly one instance and passes it around explicitly.
pub struct GridState {
    buffer: DoubleBuffer,
    playing: bool,
    phase: Phase,
    update_timer: f32,
    generations_per_second: Option<f32>,
}

impl GridState {
    /// Create a state with every cell dead, paused, at generation 0
    pub fn new(size: usize) -> Self {
        Self {
            buffer: DoubleBuffer::new(size),
            playing: false,
            phase: Phase::Idle,
            update_timer: 0.0,
            generations_per_second: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(config.grid_size());
        state.generations_per_second = config.generations_per_second;
        if config.seed_random {
            state.buffer.randomize();
        }
        state
    }

    pub fn size(&self) -> usize {
        self.buffer.current().size()
    }

    pub const fn generation(&self) -> u64 {
        self.buffer.generation()
    }

    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the current generation
    pub fn grid(&self) -> &Grid {
        self.buffer.current()
    }

    pub fn live_count(&self) -> usize {
        self.buffer.current().live_count()
    }

    /// Snapshot of one cell. Coordinates past the edge read as Dead.
    pub fn get_cell(&self, x: usize, y: usize) -> Cell {
        self.buffer.current().get(x, y).unwrap_or(Cell::Dead)
    }

    /// Flip one cell of the current generation; out-of-range is a no-op
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), CommandError> {
        self.ensure_idle()?;
        match self.buffer.toggle(x, y) {
            Some(cell) => debug!(x, y, ?cell, "cell toggled"),
            None => debug!(x, y, size = self.size(), "toggle outside grid ignored"),
        }
        Ok(())
    }

    pub fn toggle_play(&mut self) -> Result<(), CommandError> {
        self.ensure_idle()?;
        self.playing = !self.playing;
        self.update_timer = 0.0;
        info!(playing = self.playing, generation = self.generation(), "play toggled");
        Ok(())
    }

    /// Kill every cell and pause. The generation counter keeps counting.
    pub fn clear(&mut self) -> Result<(), CommandError> {
        self.ensure_idle()?;
        self.buffer.clear();
        self.playing = false;
        debug!("grid cleared");
        Ok(())
    }

    pub fn randomize(&mut self) -> Result<(), CommandError> {
        self.ensure_idle()?;
        self.buffer.randomize();
        self.playing = false;
        debug!(live = self.live_count(), "grid randomized");
        Ok(())
    }

    /// Advance exactly one generation, synchronously.
    /// A failed advance leaves the current grid and generation untouched.
    pub fn step_once(&mut self, scheduler: &StepScheduler) -> Result<u64, CommandError> {
        self.ensure_idle()?;
        self.phase = Phase::Advancing;
        let result = scheduler.advance_generation(&mut self.buffer);
        self.phase = Phase::Idle;

        match result {
            Ok(generation) => {
                debug!(generation, live = self.live_count(), "generation advanced");
                Ok(generation)
            }
            Err(err) => {
                error!(%err, generation = self.generation(), "generation advance aborted");
                Err(err.into())
            }
        }
    }

    /// Apply one command from the input layer
    pub fn apply(&mut self, command: Command, scheduler: &StepScheduler) -> Result<(), CommandError> {
        match command {
            Command::ToggleCell { x, y } => self.toggle_cell(x, y),
            Command::StepOnce => self.step_once(scheduler).map(|_| ()),
            Command::TogglePlay => self.toggle_play(),
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize(),
        }
    }

    /// Control-loop tick. While playing, advances once per tick, or at the
    /// configured rate when one is set. Returns the new generation if an
    /// advance happened. Playing stops on a failed advance.
    pub fn tick(&mut self, scheduler: &StepScheduler, delta_time: f32) -> Result<Option<u64>, CommandError> {
        if !self.playing {
            return Ok(None);
        }

        if let Some(rate) = self.generations_per_second {
            self.update_timer += delta_time;
            if self.update_timer < 1.0 / rate {
                return Ok(None);
            }
            self.update_timer = 0.0;
        }

        match self.step_once(scheduler) {
            Ok(generation) => Ok(Some(generation)),
            Err(err) => {
                self.playing = false;
                Err(err)
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), CommandError> {
        match self.phase {
            Phase::Idle => Ok(()),
            Phase::Advancing => Err(CommandError::Busy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scheduler() -> StepScheduler {
        StepScheduler::new(Some(4)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = GridState::new(10);
        assert_eq!(state.generation(), 0);
        assert!(!state.is_playing());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.live_count(), 0);
    }

    #[test]
    fn test_block_survives_one_step() {
        let mut state = GridState::new(10);
        let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
        for (x, y) in block {
            state.toggle_cell(x, y).unwrap();
        }

        assert_eq!(state.step_once(&scheduler()), Ok(1));

        for (x, y, cell) in state.grid().iter_cells() {
            let expected = if block.contains(&(x, y)) { Cell::Alive } else { Cell::Dead };
            assert_eq!(cell, expected, "cell ({x}, {y})");
        }
        assert_eq!(state.live_count(), 4);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut state = GridState::new(10);
        state.toggle_cell(2, 7).unwrap();
        state.step_once(&scheduler()).unwrap();
        assert_eq!(state.get_cell(2, 7), Cell::Dead);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_out_of_range_is_absorbed() {
        let mut state = GridState::new(10);
        assert_eq!(state.toggle_cell(10, 3), Ok(()));
        assert_eq!(state.toggle_cell(3, usize::MAX), Ok(()));
        assert_eq!(state.live_count(), 0);
        assert_eq!(state.get_cell(99, 99), Cell::Dead);
    }

    #[test]
    fn test_commands_rejected_while_advancing() {
        let mut state = GridState::new(10);
        state.phase = Phase::Advancing;
        let sched = scheduler();

        assert_eq!(state.apply(Command::ToggleCell { x: 1, y: 1 }, &sched), Err(CommandError::Busy));
        assert_eq!(state.apply(Command::TogglePlay, &sched), Err(CommandError::Busy));
        assert_eq!(state.apply(Command::StepOnce, &sched), Err(CommandError::Busy));
        assert_eq!(state.generation(), 0);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_failed_advance_stops_play_and_leaves_state() {
        let mut current = Grid::new(8);
        current.set(1, 1, Cell::Alive);
        let mut state = GridState::new(10);
        state.buffer = DoubleBuffer::mismatched(current.clone(), Grid::new(10));
        let sched = scheduler();

        assert_eq!(
            state.step_once(&sched),
            Err(CommandError::Step(StepError::SizeMismatch { current: 8, next: 10 }))
        );
        assert_eq!(state.generation(), 0);
        assert_eq!(state.grid(), &current);
        assert_eq!(state.phase(), Phase::Idle);

        state.toggle_play().unwrap();
        let result = state.tick(&sched, 0.016);

        assert!(matches!(result, Err(CommandError::Step(StepError::SizeMismatch { .. }))));
        assert!(!state.is_playing());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.generation(), 0);
        assert_eq!(state.grid(), &current);
    }

    #[test]
    fn test_tick_only_advances_while_playing() {
        let mut state = GridState::new(10);
        let sched = scheduler();

        assert_eq!(state.tick(&sched, 0.016), Ok(None));
        state.apply(Command::TogglePlay, &sched).unwrap();
        assert_eq!(state.tick(&sched, 0.016), Ok(Some(1)));
        assert_eq!(state.tick(&sched, 0.016), Ok(Some(2)));
        state.apply(Command::TogglePlay, &sched).unwrap();
        assert_eq!(state.tick(&sched, 0.016), Ok(None));
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_tick_respects_rate_limit() {
        let config = Config {
            generations_per_second: Some(2.0),
            ..Config::default()
        };
        let mut state = GridState::from_config(&config);
        let sched = scheduler();
        state.toggle_play().unwrap();

        assert_eq!(state.tick(&sched, 0.25), Ok(None));
        assert_eq!(state.tick(&sched, 0.3), Ok(Some(1)));
        assert_eq!(state.tick(&sched, 0.1), Ok(None));
    }

    #[test]
    fn test_clear_and_randomize_pause_without_resetting_generation() {
        let mut state = GridState::new(10);
        let sched = scheduler();
        state.step_once(&sched).unwrap();
        state.toggle_play().unwrap();

        state.apply(Command::Randomize, &sched).unwrap();
        assert!(!state.is_playing());

        state.toggle_play().unwrap();
        state.apply(Command::Clear, &sched).unwrap();
        assert!(!state.is_playing());
        assert_eq!(state.live_count(), 0);
        assert_eq!(state.generation(), 1);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores(x in 0usize..12, y in 0usize..12, preset in any::<bool>()) {
            let mut state = GridState::new(10);
            if preset {
                state.buffer.set(x, y, Cell::Alive);
            }
            let before = state.grid().clone();

            state.toggle_cell(x, y).unwrap();
            state.toggle_cell(x, y).unwrap();

            prop_assert_eq!(state.grid(), &before);
        }
    }
}
