use super::{Cell, Grid};

/// Two same-sized grids plus the generation counter.
/// `current` is authoritative for reads; `next` is scratch space that only
/// the step scheduler writes to.
#[derive(Clone, Debug)]
pub struct DoubleBuffer {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl DoubleBuffer {
    pub fn new(size: usize) -> Self {
        Self {
            current: Grid::new(size),
            next: Grid::new(size),
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Set one cell of the current generation; out-of-range is ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.current.set(x, y, cell);
    }

    /// Flip one cell of the current generation, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        self.current.toggle(x, y)
    }

    pub fn clear(&mut self) {
        self.current.clear();
    }

    pub fn randomize(&mut self) {
        self.current.randomize();
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Buffers whose sides disagree on N, for exercising the abort path
    #[cfg(test)]
    pub(crate) fn mismatched(current: Grid, next: Grid) -> Self {
        Self { current, next, generation: 0 }
    }

    /// Borrow the read side and the write side at once
    pub(crate) fn split(&mut self) -> (&Grid, &mut Grid) {
        (&self.current, &mut self.next)
    }

    /// Swap the roles of the two grids and bump the generation.
    /// Only called once every cell of `next` has been computed.
    pub(crate) fn commit(&mut self) -> u64 {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        self.generation
    }
}
