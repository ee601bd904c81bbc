mod error;
mod grid;
mod rules;
mod patterns;
mod algorithm;
pub mod neighborhood;
pub mod rule_engine;

pub use error::{ConfigurationError, EngineError, RenderError};
pub use grid::Grid;
pub use rules::{Band, LifeRule, all_rules};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use neighborhood::{NEIGHBOR_OFFSETS, count_live_neighbors};
pub use rule_engine::RuleEngine;
