//! Algorithm enum for selecting the evolution pass.

use serde::{Deserialize, Serialize};

/// Available evolution passes. Both produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Cell-by-cell, one thread
    #[default]
    Serial,
    /// Rows split across the rayon pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Algorithm::Parallel).unwrap(), "\"parallel\"");
    }
}
