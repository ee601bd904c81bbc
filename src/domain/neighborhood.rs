//! Moore neighborhood lookup on a toroidal grid.

use super::Grid;

/// The 8 (row, col) offsets surrounding a cell, row-major from the top-left.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbors, wrapping past every edge
#[inline]
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.get(row + dr, col + dc))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_exclude_center_and_are_unique() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        let mut sorted = NEIGHBOR_OFFSETS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn test_corner_sees_all_three_opposite_corners() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(0, 4, true).unwrap();
        grid.set(4, 0, true).unwrap();
        grid.set(4, 4, true).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
    }

    #[test]
    fn test_tiny_grid_counts_wrapped_duplicates() {
        // On a 1x1 torus every neighbor is the cell itself.
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, true).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), 8);
    }
}
