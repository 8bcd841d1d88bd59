//! Matchpaw: pet-adopter compatibility scoring.
//!
//! This crate turns two messy inputs — an adopter's partially-answered quiz
//! and a shelter's inconsistently-entered pet record — into a bounded,
//! explainable compatibility score. It is the pure core of a matching
//! feature: eligibility filtering, ranking, pagination, and persistence all
//! live in the caller.
//!
//! ## What we do here
//!
//! - **Normalize preferences** - Partial quiz answers become a fully
//!   defaulted [`PreferenceVector`]. Any step of the quiz may be skipped;
//!   nothing here ever errors.
//! - **Normalize traits** - Pet records in either the newer structured
//!   `traits` shape or the legacy flat shape become one [`TraitVector`],
//!   with unknown fields left unknown.
//! - **Score** - Nine weighted components produce a score clamped to a soft
//!   5..=98 band, plus up to three human-readable match reasons.
//! - **Detect presets** - Named adopter archetypes like
//!   [`AdopterPreset::BusyBee`] let the filtering layer relax its filters
//!   for adopters who would otherwise see too few candidates.
//!
//! Everything is deterministic and stateless: scoring a batch of pets is an
//! order-free map with no shared mutation, so callers may fan out across
//! threads freely.
//!
//! ## Main entry points
//!
//! Call [`score`] with a pet record and a preference payload (both
//! `serde_json::Value` objects), get back a [`ScoreResult`]. Use
//! [`score_with_config`] to inject a tuned [`ScoreConfig`], and
//! [`is_busy_bee`] for archetype detection.
//!
//! Both raw inputs are expected to be JSON objects. That precondition is
//! the caller's to uphold; other shapes degrade to all-defaults vectors
//! rather than failing, but the distinction is not reported.
//!
//! ## Example
//!
//! ```
//! use matchpaw::score;
//! use serde_json::json;
//!
//! let pet = json!({
//!     "name": "Mochi",
//!     "traits": { "energyLevel": 2, "indoorOnly": true, "size": "small" },
//! });
//! let prefs = json!({
//!     "energyLevel": 2,
//!     "homeType": "apartment",
//!     "indoorPreferred": true,
//! });
//!
//! let result = score(&pet, &prefs);
//! assert!(result.score >= 5 && result.score <= 98);
//! assert!(result.reasons.len() <= 3);
//! ```

mod config;
mod engine;
mod preferences;
mod presets;
mod traits;

pub use crate::config::{ConfigError, ScoreConfig, Weights};
pub use crate::engine::{score, score_batch, score_vectors, score_with_config, ScoreResult};
pub use crate::preferences::{normalize_preferences, HomeType, PreferenceVector};
pub use crate::presets::{is_busy_bee, AdopterPreset};
pub use crate::traits::{mentions_indoor, normalize_traits, PetSize, TraitVector};
