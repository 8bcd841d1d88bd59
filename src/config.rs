//! Scoring configuration.
//!
//! This module defines [`ScoreConfig`], the single place where the scorer's
//! tunables live: the component weight table, the score clamp bounds, the
//! reason cap, and the nearness threshold used for reason derivation. Domain
//! experts adjust matching behavior by editing this structure, not by
//! touching scoring logic.
//!
//! The types are cheap to clone and serde-friendly so deployments can load a
//! tuned weight table from JSON, TOML, or YAML and validate it at start-up:
//!
//! ```rust
//! use matchpaw::ScoreConfig;
//!
//! let config = ScoreConfig::default();
//! config.validate().expect("invalid scoring configuration");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight assigned to each of the nine scoring components.
///
/// Weights must sum to 1.0. The default ordering reflects domain judgment
/// that activity-level mismatch is the most common cause of adoption
/// failure, followed by living-situation fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Energy-level slider similarity.
    pub energy: f64,
    /// Sociability slider similarity.
    pub sociability: f64,
    /// Vocality tolerance vs. noise tolerance similarity.
    pub vocality: f64,
    /// Training comfort similarity.
    pub trainability: f64,
    /// Alone-hours tolerance similarity.
    pub independence: f64,
    /// Home type × pet size fit.
    pub home: f64,
    /// Kid-friendliness fit.
    pub kids: f64,
    /// Other-pets-friendliness fit.
    pub other_pets: f64,
    /// Indoor preference fit.
    pub indoor: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            energy: 0.18,
            sociability: 0.12,
            vocality: 0.06,
            trainability: 0.10,
            independence: 0.10,
            home: 0.14,
            kids: 0.12,
            other_pets: 0.10,
            indoor: 0.08,
        }
    }
}

impl Weights {
    /// Sum of all nine component weights.
    pub fn total(&self) -> f64 {
        self.energy
            + self.sociability
            + self.vocality
            + self.trainability
            + self.independence
            + self.home
            + self.kids
            + self.other_pets
            + self.indoor
    }

    fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("energy", self.energy),
            ("sociability", self.sociability),
            ("vocality", self.vocality),
            ("trainability", self.trainability),
            ("independence", self.independence),
            ("home", self.home),
            ("kids", self.kids),
            ("other_pets", self.other_pets),
            ("indoor", self.indoor),
        ]
    }
}

/// Runtime configuration for the compatibility scorer.
///
/// # Fields
///
/// - `version`: schema version for this configuration
/// - `weights`: the component weight table
/// - `min_score` / `max_score`: the soft floor and ceiling the final score is
///   clamped to, so no pet is ever presented as a certain 0% or 100% match
/// - `max_reasons`: upper bound on returned match reasons
/// - `near_threshold`: maximum absolute slider difference still counted as a
///   match when deriving reasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Component weight table; must sum to 1.0.
    pub weights: Weights,
    /// Soft floor for the final score.
    pub min_score: u8,
    /// Soft ceiling for the final score.
    pub max_score: u8,
    /// Maximum number of human-readable reasons returned per score.
    pub max_reasons: usize,
    /// Slider dimensions within this absolute difference earn a reason.
    pub near_threshold: i64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            weights: Weights::default(),
            min_score: 5,
            max_score: 98,
            max_reasons: 3,
            near_threshold: 1,
        }
    }
}

/// Errors that can occur when validating a [`ScoreConfig`].
///
/// These are configuration-time issues, intended to surface during service
/// start-up rather than at scoring time — scoring itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A component weight is negative, NaN, or infinite.
    #[error("weight `{name}` must be a finite, non-negative number (got {value})")]
    InvalidWeight {
        /// Name of the offending weight entry.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The nine component weights do not sum to 1.0.
    #[error("component weights must sum to 1.0 (got {sum})")]
    UnnormalizedWeights {
        /// Actual sum of the configured weights.
        sum: f64,
    },

    /// The configured floor exceeds the ceiling.
    #[error("min_score ({min}) exceeds max_score ({max})")]
    InvertedScoreBounds { min: u8, max: u8 },

    /// A reason cap of zero would make every result unexplainable.
    #[error("max_reasons must be at least 1")]
    ZeroReasonCap,

    /// The nearness threshold is negative.
    #[error("near_threshold must be non-negative (got {0})")]
    NegativeNearThreshold(i64),
}

impl ScoreConfig {
    /// Tolerance for the weight-sum check; absorbs decimal rounding in
    /// hand-edited configuration files.
    const WEIGHT_SUM_EPSILON: f64 = 1e-6;

    /// Validates internal consistency of this configuration.
    ///
    /// Cheap, in-memory only. Call once at start-up when loading a tuned
    /// weight table from external configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        let sum = self.weights.total();
        if (sum - 1.0).abs() > Self::WEIGHT_SUM_EPSILON {
            return Err(ConfigError::UnnormalizedWeights { sum });
        }

        if self.min_score > self.max_score {
            return Err(ConfigError::InvertedScoreBounds {
                min: self.min_score,
                max: self.max_score,
            });
        }

        if self.max_reasons == 0 {
            return Err(ConfigError::ZeroReasonCap);
        }

        if self.near_threshold < 0 {
            return Err(ConfigError::NegativeNearThreshold(self.near_threshold));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ScoreConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_score, 5);
        assert_eq!(cfg.max_score, 98);
        assert_eq!(cfg.max_reasons, 3);
    }

    #[test]
    fn default_weights_sum_to_one() {
        let sum = Weights::default().total();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
    }

    #[test]
    fn negative_weight_rejected() {
        let cfg = ScoreConfig {
            weights: Weights {
                energy: -0.1,
                ..Weights::default()
            },
            ..ScoreConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidWeight { name, .. }) => assert_eq!(name, "energy"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn nan_weight_rejected() {
        let cfg = ScoreConfig {
            weights: Weights {
                home: f64::NAN,
                ..Weights::default()
            },
            ..ScoreConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidWeight { name: "home", .. })
        ));
    }

    #[test]
    fn unnormalized_weights_rejected() {
        let cfg = ScoreConfig {
            weights: Weights {
                energy: 0.5,
                ..Weights::default()
            },
            ..ScoreConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnnormalizedWeights { .. })
        ));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let cfg = ScoreConfig {
            min_score: 60,
            max_score: 40,
            ..ScoreConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedScoreBounds { min: 60, max: 40 })
        ));
    }

    #[test]
    fn zero_reason_cap_rejected() {
        let cfg = ScoreConfig {
            max_reasons: 0,
            ..ScoreConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroReasonCap)));
    }

    #[test]
    fn negative_near_threshold_rejected() {
        let cfg = ScoreConfig {
            near_threshold: -1,
            ..ScoreConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NegativeNearThreshold(-1))
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = ScoreConfig::default();
        let encoded = serde_json::to_string(&cfg).expect("serialize");
        let decoded: ScoreConfig = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(cfg, decoded);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let decoded: ScoreConfig =
            serde_json::from_str(r#"{ "max_reasons": 2 }"#).expect("deserialize");
        assert_eq!(decoded.max_reasons, 2);
        assert_eq!(decoded.weights, Weights::default());
        assert_eq!(decoded.min_score, 5);
    }
}
