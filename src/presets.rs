//! Named adopter archetypes.
//!
//! Presets are pure predicates over normalized preferences. The filtering
//! layer uses them for fallback logic: when strict species/location filters
//! leave a named-archetype adopter with too few candidates, it can relax
//! those filters. Adding an archetype means adding a variant here — the
//! scoring engine is never involved.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::preferences::{normalize_preferences, HomeType, PreferenceVector};

/// A named adopter archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum AdopterPreset {
    /// Apartment-dwelling, indoor-preferring adopter looking for a
    /// low-energy pet.
    BusyBee,
}

impl AdopterPreset {
    /// Whether `prefs` falls under this archetype.
    pub fn matches(&self, prefs: &PreferenceVector) -> bool {
        match self {
            AdopterPreset::BusyBee => {
                prefs.home_type == HomeType::Apartment
                    && prefs.indoor_preferred
                    && prefs.energy_level <= 2
            }
        }
    }
}

/// Convenience wrapper: normalizes `raw_preferences` and tests the
/// [`AdopterPreset::BusyBee`] archetype.
pub fn is_busy_bee(raw_preferences: &Value) -> bool {
    AdopterPreset::BusyBee.matches(&normalize_preferences(raw_preferences))
}
