use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use crate::config::{SeedStrategy, SimulationConfig};
use crate::domain::{Algorithm, ConfigurationError, EngineError, Grid, LifeRule, Pattern, RuleEngine, presets};

/// Whether the simulation has been populated or advanced yet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Just constructed: all cells dead, generation 0
    Unseeded,
    /// Seeded or ticked at least once
    Running,
}

/// Double-buffered Game of Life state.
///
/// `buffers[active]` always holds the last fully computed generation; the
/// other buffer is scratch space that is only written during [`tick`].
/// The engine does no locking: hosts that share it across threads must guard
/// the whole value (e.g. with a `Mutex<SimulationState>`).
///
/// [`tick`]: SimulationState::tick
#[derive(Clone, Debug)]
pub struct SimulationState {
    buffers: [Grid; 2],
    active: usize,
    generation: u64,
    engine: RuleEngine,
    algorithm: Algorithm,
    lifecycle: Lifecycle,
}

impl SimulationState {
    /// Create an unseeded simulation with two dead `rows` x `cols` buffers
    pub fn new(rows: usize, cols: usize, rule: LifeRule) -> Result<Self, ConfigurationError> {
        rule.validate()?;
        let current = Grid::new(rows, cols)?;
        let scratch = current.clone();
        debug!(rows, cols, %rule, "simulation allocated");
        Ok(Self {
            buffers: [current, scratch],
            active: 0,
            generation: 0,
            engine: RuleEngine::new(rule),
            algorithm: Algorithm::default(),
            lifecycle: Lifecycle::Unseeded,
        })
    }

    /// Build and seed a simulation from a validated configuration
    pub fn from_config(config: &SimulationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut state = Self::new(config.rows, config.cols, config.rule)?
            .with_algorithm(config.algorithm);
        match &config.seed {
            SeedStrategy::Cells { cells } => state.seed(cells)?,
            SeedStrategy::Preset { name, row, col } => {
                state.seed_pattern(&presets::by_name(name)?, *row, *col)?
            }
            SeedStrategy::Random { probability, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_rng(&mut rand::rng()),
                };
                state.seed_random(*probability, &mut rng)?
            }
        }
        Ok(state)
    }

    /// Select the evolution pass (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn rule(&self) -> &LifeRule {
        self.engine.rule()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Read-only view of the last computed generation
    pub fn current_grid(&self) -> &Grid {
        &self.buffers[self.active]
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Replace the current generation with exactly `cells` alive.
    ///
    /// Every coordinate is checked before anything is written, so a failed
    /// call leaves the grid untouched.
    pub fn seed(&mut self, cells: &[(usize, usize)]) -> Result<(), EngineError> {
        let grid = &mut self.buffers[self.active];
        cells
            .iter()
            .try_for_each(|&(row, col)| grid.check_bounds(row, col))?;

        grid.clear();
        for &(row, col) in cells {
            grid.set(row, col, true)?;
        }
        self.lifecycle = Lifecycle::Running;
        debug!(cells = cells.len(), generation = self.generation, "seeded");
        Ok(())
    }

    /// Seed a pattern with its top-left corner at (row, col)
    pub fn seed_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), EngineError> {
        debug!(pattern = pattern.name, description = pattern.description, row, col, "seeding pattern");
        let (rows, cols) = self.current_grid().dimensions();
        let cells = pattern
            .cells_at(row, col)
            .ok_or(EngineError::OutOfBounds { row, col, rows, cols })?;
        self.seed(&cells)
    }

    /// Fill the current generation at random, each cell alive with `probability`
    pub fn seed_random<R: Rng>(&mut self, probability: f64, rng: &mut R) -> Result<(), EngineError> {
        let grid = &mut self.buffers[self.active];
        grid.randomize(probability, rng)?;
        self.lifecycle = Lifecycle::Running;
        debug!(probability, population = grid.population(), "seeded at random");
        Ok(())
    }

    /// Advance one generation: compute into the scratch buffer, flip the
    /// active index, bump the counter. Returns the new generation.
    pub fn tick(&mut self) -> u64 {
        let next = 1 - self.active;
        let [first, second] = &mut self.buffers;
        let (source, dest) = if self.active == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        match self.algorithm {
            Algorithm::Serial => self.engine.write_next(source, dest),
            Algorithm::Parallel => self.engine.write_next_parallel(source, dest),
        }

        self.active = next;
        self.generation += 1;
        self.lifecycle = Lifecycle::Running;
        trace!(generation = self.generation, "tick");
        self.generation
    }
}
