//! Next-generation computation.
//!
//! Every destination cell is derived from the source snapshot alone, so all
//! cells update simultaneously. The borrow of `source` is shared and the
//! borrow of `dest` is exclusive, which rules out aliasing at compile time.

use rayon::prelude::*;

use super::{ConfigurationError, Grid, LifeRule, neighborhood::count_live_neighbors};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleEngine {
    rule: LifeRule,
}

impl RuleEngine {
    pub const fn new(rule: LifeRule) -> Self {
        Self { rule }
    }

    pub const fn rule(&self) -> &LifeRule {
        &self.rule
    }

    /// Write the successor of `source` into `dest` (serial)
    pub fn compute_next(&self, source: &Grid, dest: &mut Grid) -> Result<(), ConfigurationError> {
        check_shapes(source, dest)?;
        self.write_next(source, dest);
        Ok(())
    }

    /// Same result as [`RuleEngine::compute_next`], rows evaluated with rayon.
    /// Much faster for grids > 100x100
    pub fn compute_next_parallel(
        &self,
        source: &Grid,
        dest: &mut Grid,
    ) -> Result<(), ConfigurationError> {
        check_shapes(source, dest)?;
        self.write_next_parallel(source, dest);
        Ok(())
    }

    /// Shapes must already agree.
    pub(crate) fn write_next(&self, source: &Grid, dest: &mut Grid) {
        debug_assert!(source.same_shape(dest));
        let cols = source.cols();
        dest.cells_mut()
            .chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| self.write_row(source, row, out));
    }

    /// Shapes must already agree.
    pub(crate) fn write_next_parallel(&self, source: &Grid, dest: &mut Grid) {
        debug_assert!(source.same_shape(dest));
        let cols = source.cols();
        dest.cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| self.write_row(source, row, out));
    }

    #[inline]
    fn write_row(&self, source: &Grid, row: usize, out: &mut [bool]) {
        for (col, cell) in out.iter_mut().enumerate() {
            let alive = source.get(row as isize, col as isize);
            *cell = self.rule.next_state(alive, count_live_neighbors(source, row, col));
        }
    }
}

fn check_shapes(source: &Grid, dest: &Grid) -> Result<(), ConfigurationError> {
    if source.same_shape(dest) {
        return Ok(());
    }
    let (source_rows, source_cols) = source.dimensions();
    let (dest_rows, dest_cols) = dest.dimensions();
    Err(ConfigurationError::DimensionMismatch {
        source_rows,
        source_cols,
        dest_rows,
        dest_cols,
    })
}
