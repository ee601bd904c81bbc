use std::fmt;

use rand::Rng;

use super::{ConfigurationError, EngineError};

/// Fixed-size boolean matrix with toroidal reads.
///
/// Cells are stored row-major. Reads through [`Grid::get`] wrap around every
/// edge; writes through [`Grid::set`] must be in bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigurationError> {
        let len = Self::cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Number of cells in a `rows` x `cols` grid, rejecting empty grids and
    /// sizes whose cell count or coordinates don't fit in `isize`
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize, ConfigurationError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError::EmptyGrid { rows, cols });
        }
        rows.checked_mul(cols)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(ConfigurationError::GridTooLarge { rows, cols })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Read a cell with wrap-around on both axes. Defined for any coordinate.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> bool {
        let row = row.rem_euclid(self.rows as isize) as usize;
        let col = col.rem_euclid(self.cols as isize) as usize;
        self.cells[self.index(row, col)]
    }

    /// In-bounds read without wrapping
    pub fn is_alive(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Write a single cell. Never wraps.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), EngineError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = alive;
        Ok(())
    }

    pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<(), EngineError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Whether `other` has the same dimensions
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Raw row-major storage, for passes that write whole rows at once
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Set each cell alive independently with the given probability
    pub fn randomize<R: Rng>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), ConfigurationError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigurationError::InvalidProbability(probability));
        }
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = rng.random_bool(probability));
        Ok(())
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &alive)| (idx / self.cols, idx % self.cols, alive))
    }

    /// Coordinates of every live cell, in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter_map(|(row, col, alive)| alive.then_some((row, col)))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// One line per row, `x` for alive and `.` for dead, space separated.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for (col, &alive) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if alive { "x" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
