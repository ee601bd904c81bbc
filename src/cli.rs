//! Command-line arguments shared by the window and headless hosts.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::{SeedStrategy, SimulationConfig};
use crate::domain::{Algorithm, LifeRule};

/// Command-line overrides applied on top of the configuration file.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON configuration file; missing keys fall back to defaults.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Number of grid rows.
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<usize>,
    /// Number of grid columns.
    #[arg(long, value_name = "COLS")]
    pub cols: Option<usize>,
    /// Milliseconds between generations.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub tick_ms: Option<u64>,
    /// Named rule: conway, maze, coral or life_without_death.
    #[arg(long, value_name = "NAME")]
    pub rule: Option<String>,
    /// Named starting pattern, placed at --at.
    #[arg(long, value_name = "NAME", conflicts_with = "random")]
    pub pattern: Option<String>,
    /// Top-left corner for --pattern as ROW,COL.
    #[arg(long, value_name = "ROW,COL", default_value = "6,1")]
    pub at: Position,
    /// Random fill with each cell alive at this probability.
    #[arg(long, value_name = "P")]
    pub random: Option<f64>,
    /// Seed for --random, for reproducible runs.
    #[arg(long, value_name = "SEED", requires = "random")]
    pub rng_seed: Option<u64>,
    /// Evaluate rows across all cores.
    #[arg(long)]
    pub parallel: bool,
    /// Log verbosity.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl CliArgs {
    /// Load the configuration file (if any) and apply overrides
    pub fn load_config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_period_ms = tick_ms;
        }
        if let Some(name) = &self.rule {
            config.rule = LifeRule::by_name(name)?;
        }
        if let Some(name) = &self.pattern {
            config.seed = SeedStrategy::Preset {
                name: name.clone(),
                row: self.at.row,
                col: self.at.col,
            };
        }
        if let Some(probability) = self.random {
            config.seed = SeedStrategy::Random { probability, seed: self.rng_seed };
        }
        if self.parallel {
            config.algorithm = Algorithm::Parallel;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// A cell position parsed from a ROW,COL command-line argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl FromStr for Position {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (row, col) = value
            .split_once(',')
            .ok_or_else(|| "expected format ROW,COL".to_string())?;
        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid row: {error}"))?;
        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid column: {error}"))?;
        Ok(Self { row, col })
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = CliArgs::try_parse_from(["torus_life"]).unwrap();
        assert_eq!(args.load_config().unwrap(), SimulationConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = CliArgs::try_parse_from([
            "torus_life", "--rows", "12", "--cols", "20", "--tick-ms", "50",
            "--rule", "maze", "--pattern", "block", "--at", "3,4", "--parallel",
        ])
        .unwrap();
        let config = args.load_config().unwrap();
        assert_eq!((config.rows, config.cols, config.tick_period_ms), (12, 20, 50));
        assert_eq!(config.rule.to_string(), "B3/S12345");
        assert_eq!(
            config.seed,
            SeedStrategy::Preset { name: "block".to_string(), row: 3, col: 4 }
        );
        assert_eq!(config.algorithm, Algorithm::Parallel);
    }

    #[test]
    fn test_random_with_seed() {
        let args =
            CliArgs::try_parse_from(["torus_life", "--random", "0.25", "--rng-seed", "11"]).unwrap();
        assert_eq!(
            args.load_config().unwrap().seed,
            SeedStrategy::Random { probability: 0.25, seed: Some(11) }
        );
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!("3, 4".parse::<Position>().unwrap(), Position { row: 3, col: 4 });
        assert!("3".parse::<Position>().is_err());
        assert!("a,1".parse::<Position>().is_err());
    }

    #[test]
    fn test_zero_tick_rejected_by_parser() {
        assert!(CliArgs::try_parse_from(["torus_life", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let args = CliArgs::try_parse_from(["torus_life", "--random", "1.5"]).unwrap();
        assert!(args.load_config().is_err());
    }
}
