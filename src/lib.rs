// Domain layer - grid, rule bands, next-generation computation
pub mod domain;

// Application layer - simulation lifecycle and tick scheduling
pub mod application;

// Infrastructure layer - renderers, configuration, command line
pub mod rendering;
pub mod config;
pub mod cli;

// Re-exports for convenience
pub use domain::{Grid, LifeRule, Band, RuleEngine, Pattern, presets, Algorithm, EngineError, ConfigurationError};
pub use application::{SimulationState, Scheduler, Lifecycle};
pub use rendering::{Renderer, TextRenderer, render_text};
pub use config::{SimulationConfig, SeedStrategy};
