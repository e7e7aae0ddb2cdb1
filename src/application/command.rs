/// Abstract user intent, produced by the input layer.
/// Commands are applied strictly between generation advances.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Flip one cell of the current generation
    ToggleCell { x: usize, y: usize },
    /// Advance exactly one generation
    StepOnce,
    /// Start or pause continuous play
    TogglePlay,
    /// Kill every cell and pause
    Clear,
    /// Reseed the grid at random and pause
    Randomize,
}
