use super::Cell;

/// Grid is a fixed-size N×N arena of cells.
/// The edge is hard: coordinates outside [0, N) simply do not exist.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new square grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Side length N
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index (row-major)
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Convert a 1D index back to (x, y)
    pub const fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip one cell, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize grid (~25% alive)
    pub fn randomize(&mut self) {
        use rand::Rng;
        let mut rng = rand::rng();

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.25) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Raw cell storage, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable raw storage; used by the scheduler to hand out disjoint cells
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| {
                let (x, y) = self.coords_of(i);
                (x, y, cell)
            })
    }
}
