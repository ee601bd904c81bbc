use super::ConfigurationError;

/// Represents a named pattern that can be seeded onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Absolute coordinates with the pattern's top-left corner at (row, col).
    /// `None` if any cell lies past `usize::MAX`.
    pub fn cells_at(&self, row: usize, col: usize) -> Option<Vec<(usize, usize)>> {
        self.cells
            .iter()
            .map(|&(dr, dc)| Some((row.checked_add(dr)?, col.checked_add(dc)?)))
            .collect()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Lightweight Spaceship (LWSS), travels along a row
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r_pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
            acorn(),
        ]
    }

    pub fn by_name(name: &str) -> Result<Pattern, ConfigurationError> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigurationError::UnknownPreset(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.rows, lwss.cols), (4, 5));
    }

    #[test]
    fn test_cells_at_offsets_every_cell() {
        let cells = presets::glider().cells_at(6, 1).unwrap();
        assert_eq!(cells, vec![(6, 2), (7, 3), (8, 1), (8, 2), (8, 3)]);
    }

    #[test]
    fn test_cells_at_overflow_is_none() {
        assert!(presets::glider().cells_at(usize::MAX, 0).is_none());
        assert!(presets::glider().cells_at(0, usize::MAX - 1).is_none());
        assert!(presets::block().cells_at(usize::MAX - 1, 0).is_some());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(presets::by_name("Block").unwrap().cells.len(), 4);
        assert!(matches!(
            presets::by_name("gosper"),
            Err(ConfigurationError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
