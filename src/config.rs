//! Startup configuration: grid size, tick period, rule bands and seeding.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, ConfigurationError, Grid, LifeRule, presets};

pub const DEFAULT_ROWS: usize = 45;
pub const DEFAULT_COLS: usize = 80;
pub const DEFAULT_TICK_PERIOD_MS: u64 = 100;
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// How the first generation is populated
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Explicit (row, col) cells
    Cells { cells: Vec<(usize, usize)> },
    /// A named pattern with its top-left corner at (row, col)
    Preset { name: String, row: usize, col: usize },
    /// Each cell independently alive with `probability`
    Random {
        #[serde(default = "default_probability")]
        probability: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
}

fn default_probability() -> f64 {
    DEFAULT_PROBABILITY
}

impl Default for SeedStrategy {
    /// A glider near the top-left corner
    fn default() -> Self {
        SeedStrategy::Preset { name: "glider".to_string(), row: 6, col: 1 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_period_ms: u64,
    pub rule: LifeRule,
    pub algorithm: Algorithm,
    pub seed: SeedStrategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            rule: LifeRule::default(),
            algorithm: Algorithm::default(),
            seed: SeedStrategy::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Check everything that can be checked before the grid exists.
    /// Seed coordinates are checked against the grid when seeding.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Grid::cell_count(self.rows, self.cols)?;
        if self.tick_period_ms == 0 {
            return Err(ConfigurationError::ZeroTickPeriod);
        }
        self.rule.validate()?;
        match &self.seed {
            SeedStrategy::Cells { .. } => Ok(()),
            SeedStrategy::Preset { name, .. } => presets::by_name(name).map(|_| ()),
            SeedStrategy::Random { probability, .. } => {
                if (0.0..=1.0).contains(probability) {
                    Ok(())
                } else {
                    Err(ConfigurationError::InvalidProbability(*probability))
                }
            }
        }
    }
}
