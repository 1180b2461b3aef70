use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{InferError, InferResult};

/// Sample limit applied when none is requested: unbounded.
pub const DEFAULT_MAX_SAMPLES: Option<usize> = None;

/// Strategy used when no other is requested.
pub const DEFAULT_STRATEGY: SolveStrategy = SolveStrategy::Inverse;

/// How the coefficient vector is obtained from the samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStrategy {
    /// Invert the Vandermonde basis and multiply by the outputs.
    #[default]
    Inverse,
    /// Sum Lagrange basis polynomials expanded into the power basis.
    Lagrange,
}

/// All strategies, in declaration order.
pub const SUPPORTED_STRATEGIES: [SolveStrategy; 2] =
    [SolveStrategy::Inverse, SolveStrategy::Lagrange];

impl SolveStrategy {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            SolveStrategy::Inverse => "inverse",
            SolveStrategy::Lagrange => "lagrange",
        }
    }
}

impl fmt::Display for SolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when an unknown strategy name is requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown solve strategy `{0}`; expected one of: inverse, lagrange")]
pub struct UnknownStrategy(pub String);

impl TryFrom<&str> for SolveStrategy {
    type Error = UnknownStrategy;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SUPPORTED_STRATEGIES
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownStrategy(value.to_owned()))
    }
}

impl FromStr for SolveStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Tunables for a single inference call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferConfig {
    strategy: SolveStrategy,
    max_samples: Option<usize>,
}

impl InferConfig {
    pub const DEFAULT: Self = Self::new(DEFAULT_STRATEGY, DEFAULT_MAX_SAMPLES);

    #[inline]
    pub const fn new(strategy: SolveStrategy, max_samples: Option<usize>) -> Self {
        Self {
            strategy,
            max_samples,
        }
    }

    #[inline]
    pub const fn strategy(&self) -> SolveStrategy {
        self.strategy
    }

    /// Upper bound on the sample count, `None` when unbounded.
    #[inline]
    pub const fn max_samples(&self) -> Option<usize> {
        self.max_samples
    }

    #[inline]
    pub const fn with_strategy(mut self, strategy: SolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    pub const fn with_max_samples(mut self, max_samples: Option<usize>) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Reject empty sample sets and sets above the configured limit.
    pub fn check_sample_count(&self, samples: usize) -> InferResult<()> {
        if samples == 0 {
            return Err(InferError::EmptyInput);
        }
        match self.max_samples {
            Some(limit) if samples > limit => {
                Err(InferError::TooManySamples { samples, limit })
            }
            _ => Ok(()),
        }
    }
}

impl Default for InferConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_inverse_without_limit() {
        let config = InferConfig::default();
        assert_eq!(config.strategy(), SolveStrategy::Inverse);
        assert_eq!(config.max_samples(), None);
        assert_eq!(config, InferConfig::DEFAULT);
        assert!(config.check_sample_count(65).is_ok());
        assert!(config.check_sample_count(100_000).is_ok());
    }

    #[test]
    fn builder_setters_replace_fields() {
        let config = InferConfig::default()
            .with_strategy(SolveStrategy::Lagrange)
            .with_max_samples(Some(8));
        assert_eq!(config.strategy(), SolveStrategy::Lagrange);
        assert_eq!(config.max_samples(), Some(8));
    }

    #[test]
    fn sample_count_guard() {
        let config = InferConfig::default().with_max_samples(Some(3));
        assert_eq!(config.check_sample_count(0), Err(InferError::EmptyInput));
        assert!(config.check_sample_count(1).is_ok());
        assert!(config.check_sample_count(3).is_ok());
        assert_eq!(
            config.check_sample_count(4),
            Err(InferError::TooManySamples {
                samples: 4,
                limit: 3
            })
        );

        let unbounded = config.with_max_samples(None);
        assert!(unbounded.check_sample_count(10_000).is_ok());
        assert_eq!(unbounded.check_sample_count(0), Err(InferError::EmptyInput));
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in SUPPORTED_STRATEGIES {
            assert_eq!(SolveStrategy::try_from(strategy.as_str()), Ok(strategy));
            assert_eq!(strategy.to_string().parse::<SolveStrategy>(), Ok(strategy));
        }
        assert_eq!(" Lagrange ".parse::<SolveStrategy>(), Ok(SolveStrategy::Lagrange));
        assert_eq!(
            SolveStrategy::try_from("qr"),
            Err(UnknownStrategy("qr".to_owned()))
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: InferConfig =
            serde_json::from_str(r#"{"strategy":"lagrange"}"#).unwrap();
        assert_eq!(config.strategy(), SolveStrategy::Lagrange);
        assert_eq!(config.max_samples(), DEFAULT_MAX_SAMPLES);

        let config: InferConfig = serde_json::from_str(r#"{"max_samples":12}"#).unwrap();
        assert_eq!(config.max_samples(), Some(12));
        assert_eq!(config.strategy(), SolveStrategy::Inverse);
    }
}
