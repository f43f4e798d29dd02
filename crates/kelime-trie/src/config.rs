// Decoder configuration: edit costs, penalty budget, near-key table

use crate::ConfigError;
use crate::hypothesis::Operation;
use crate::proximity::ProximityTable;

/// Default penalty budget.
pub const DEFAULT_MAX_PENALTY: f32 = 1.0;

/// Cost of each edit operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penalties {
    /// Input is missing a character present in the word.
    pub insertion: f32,
    /// Input has an extra character.
    pub deletion: f32,
    /// Input character replaced by another.
    pub substitution: f32,
    /// Replacement by a keyboard neighbor (only with a proximity table).
    pub near_key_substitution: f32,
    /// Two adjacent input characters swapped.
    pub transposition: f32,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
            near_key_substitution: 0.5,
            transposition: 1.0,
        }
    }
}

impl Penalties {
    /// Every cost must be finite and strictly positive; a zero-cost move
    /// that does not advance the input could be repeated forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let costs = [
            (Operation::Insertion, self.insertion),
            (Operation::Deletion, self.deletion),
            (Operation::Substitution, self.substitution),
            (Operation::Substitution, self.near_key_substitution),
            (Operation::Transposition, self.transposition),
        ];
        for (operation, value) in costs {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidPenalty { operation, value });
            }
        }
        Ok(())
    }
}

/// Complete decoder configuration.
///
/// Near-key substitution is enabled exactly when a proximity table is set.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderConfig {
    /// Largest total penalty an alignment may accumulate.
    pub max_penalty: f32,
    pub penalties: Penalties,
    pub proximity: Option<ProximityTable>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_penalty: DEFAULT_MAX_PENALTY,
            penalties: Penalties::default(),
            proximity: None,
        }
    }
}

impl DecoderConfig {
    pub fn new(max_penalty: f32) -> Self {
        Self {
            max_penalty,
            ..Self::default()
        }
    }

    /// Enable near-key substitution with the given table.
    pub fn with_proximity(mut self, table: ProximityTable) -> Self {
        self.proximity = Some(table);
        self
    }

    pub fn with_penalties(mut self, penalties: Penalties) -> Self {
        self.penalties = penalties;
        self
    }

    /// Returns `true` if substitutions are discounted for keyboard neighbors.
    #[inline]
    pub fn uses_proximity(&self) -> bool {
        self.proximity.is_some()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_penalty.is_finite() || self.max_penalty < 0.0 {
            return Err(ConfigError::InvalidMaxPenalty(self.max_penalty));
        }
        self.penalties.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.max_penalty, 1.0);
        assert_eq!(config.penalties.insertion, 1.0);
        assert_eq!(config.penalties.deletion, 1.0);
        assert_eq!(config.penalties.substitution, 1.0);
        assert_eq!(config.penalties.near_key_substitution, 0.5);
        assert_eq!(config.penalties.transposition, 1.0);
        assert!(!config.uses_proximity());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_budget_is_valid() {
        assert!(DecoderConfig::new(0.0).validate().is_ok());
    }

    #[test]
    fn negative_budget_is_rejected() {
        assert_eq!(
            DecoderConfig::new(-1.0).validate(),
            Err(ConfigError::InvalidMaxPenalty(-1.0))
        );
        assert!(DecoderConfig::new(f32::NAN).validate().is_err());
        assert!(DecoderConfig::new(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn non_positive_costs_are_rejected() {
        let penalties = Penalties {
            deletion: 0.0,
            ..Penalties::default()
        };
        assert_eq!(
            DecoderConfig::default().with_penalties(penalties).validate(),
            Err(ConfigError::InvalidPenalty {
                operation: Operation::Deletion,
                value: 0.0
            })
        );

        let penalties = Penalties {
            transposition: -0.5,
            ..Penalties::default()
        };
        assert!(penalties.validate().is_err());
    }

    #[test]
    fn proximity_enables_near_keys() {
        let config = DecoderConfig::new(2.0).with_proximity(ProximityTable::new());
        assert!(config.uses_proximity());
        assert_eq!(config.max_penalty, 2.0);
    }
}
