use std::io;

use thiserror::Error;

/// Errors raised by grid access, seeding and rule evaluation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A direct write (or seed coordinate) fell outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl EngineError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, EngineError::OutOfBounds { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, EngineError::Configuration(_))
    }
}

/// Startup-time validation failures. The engine never runs with any of these.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("a {rows}x{cols} grid has more cells than can be addressed")]
    GridTooLarge { rows: usize, cols: usize },
    #[error("source grid is {source_rows}x{source_cols} but destination is {dest_rows}x{dest_cols}")]
    DimensionMismatch {
        source_rows: usize,
        source_cols: usize,
        dest_rows: usize,
        dest_cols: usize,
    },
    #[error("{name} band [{min}, {max}] must satisfy min <= max <= 8")]
    InvalidBand { name: &'static str, min: u8, max: u8 },
    #[error("probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("tick period must be at least one millisecond")]
    ZeroTickPeriod,
    #[error("unknown pattern preset `{0}`")]
    UnknownPreset(String),
    #[error("unknown rule `{0}`")]
    UnknownRule(String),
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by renderers that write to an output stream.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
}
