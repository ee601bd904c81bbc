use std::fmt;

use serde::{Deserialize, Serialize};

use super::ConfigurationError;

/// Inclusive range of live-neighbor counts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub min: u8,
    pub max: u8,
}

impl Band {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Band matching a single neighbor count
    pub const fn exactly(count: u8) -> Self {
        Self { min: count, max: count }
    }

    #[inline]
    pub const fn contains(self, neighbors: u8) -> bool {
        self.min <= neighbors && neighbors <= self.max
    }

    fn validate(self, name: &'static str) -> Result<(), ConfigurationError> {
        if self.min <= self.max && self.max <= 8 {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidBand { name, min: self.min, max: self.max })
        }
    }
}

/// Survival/birth rule expressed as two neighbor-count bands.
///
/// A live cell stays alive iff its neighbor count is in `survival`; a dead
/// cell comes alive iff its count is in `birth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeRule {
    pub survival: Band,
    pub birth: Band,
}

impl LifeRule {
    /// Conway's Game of Life (B3/S23)
    pub const CONWAY: Self = Self {
        survival: Band::new(2, 3),
        birth: Band::exactly(3),
    };

    /// Build a rule, rejecting bands outside 0..=8 or with min > max
    pub fn new(survival: Band, birth: Band) -> Result<Self, ConfigurationError> {
        let rule = Self { survival, birth };
        rule.validate()?;
        Ok(rule)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.survival.validate("survival")?;
        self.birth.validate("birth")
    }

    /// Pure function to compute the next state of one cell
    #[inline]
    pub const fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survival.contains(neighbors)
        } else {
            self.birth.contains(neighbors)
        }
    }

    /// Look up one of the band-expressible presets by name
    pub fn by_name(name: &str) -> Result<Self, ConfigurationError> {
        all_rules()
            .into_iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(_, rule)| rule)
            .ok_or_else(|| ConfigurationError::UnknownRule(name.to_string()))
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::CONWAY
    }
}

/// B/S notation, e.g. `B3/S23`
impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        (self.birth.min..=self.birth.max).try_for_each(|n| write!(f, "{n}"))?;
        f.write_str("/S")?;
        (self.survival.min..=self.survival.max).try_for_each(|n| write!(f, "{n}"))
    }
}

/// Get all named rules
pub fn all_rules() -> Vec<(&'static str, LifeRule)> {
    vec![
        ("conway", LifeRule::CONWAY),
        // B3/S12345
        ("maze", LifeRule { survival: Band::new(1, 5), birth: Band::exactly(3) }),
        // B3/S45678
        ("coral", LifeRule { survival: Band::new(4, 8), birth: Band::exactly(3) }),
        // B3/S012345678
        (
            "life_without_death",
            LifeRule { survival: Band::new(0, 8), birth: Band::exactly(3) },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = LifeRule::CONWAY;

        // Underpopulation
        assert!(!rule.next_state(true, 0));
        assert!(!rule.next_state(true, 1));

        // Survival
        assert!(rule.next_state(true, 2));
        assert!(rule.next_state(true, 3));

        // Overpopulation
        assert!(!rule.next_state(true, 4));
        assert!(!rule.next_state(true, 8));

        // Reproduction
        assert!(rule.next_state(false, 3));
        assert!(!rule.next_state(false, 2));
        assert!(!rule.next_state(false, 4));
    }

    #[test]
    fn test_default_is_conway() {
        assert_eq!(LifeRule::default(), LifeRule::CONWAY);
        assert_eq!(LifeRule::CONWAY.to_string(), "B3/S23");
    }

    #[test]
    fn test_invalid_bands_rejected() {
        assert!(matches!(
            LifeRule::new(Band::new(3, 2), Band::exactly(3)),
            Err(ConfigurationError::InvalidBand { name: "survival", min: 3, max: 2 })
        ));
        assert!(matches!(
            LifeRule::new(Band::new(2, 3), Band::new(3, 9)),
            Err(ConfigurationError::InvalidBand { name: "birth", .. })
        ));
    }

    #[test]
    fn test_wider_birth_band() {
        let rule = LifeRule::new(Band::new(2, 3), Band::new(3, 4)).unwrap();
        assert!(rule.next_state(false, 4));
        assert!(!rule.next_state(false, 5));
        assert_eq!(rule.to_string(), "B34/S23");
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(LifeRule::by_name("Conway").unwrap(), LifeRule::CONWAY);
        assert_eq!(LifeRule::by_name("maze").unwrap().to_string(), "B3/S12345");
        assert!(matches!(
            LifeRule::by_name("highlife"),
            Err(ConfigurationError::UnknownRule(_))
        ));
    }
}
