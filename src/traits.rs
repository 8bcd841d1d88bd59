//! Pet trait normalization.
//!
//! Shelter records come in two generations: newer listings carry a structured
//! `traits` sub-object with canonical keys, older ones spread the same
//! information across legacy flat fields. [`normalize_traits`] reconciles both
//! into a [`TraitVector`] where unknown stays unknown — no numeric defaults
//! are invented here, the similarity function owns that fallback.
//!
//! # Field resolution
//!
//! Per field, in order: structured `traits` key → legacy flat field → `None`.
//! The legacy mapping is fixed:
//!
//! | Canonical trait | Legacy field |
//! |-----------------|--------------|
//! | `energyLevel` | `energyLevel` |
//! | `sociability` | `sociability` |
//! | `noiseTolerance` | `vocality` |
//! | `trainingComfort` | `trainability` |
//! | `aloneHoursOk` | `independence` |
//! | `indoorOnly` | `indoorOnly` (else inferred from text) |
//! | `apartmentFriendly` | `apartmentFriendly` |
//! | `kidFriendly` | `goodWithKids` |
//! | `otherPetsFriendly` | `goodWithPets` |
//!
//! `indoorOnly` has a third resolution step: when neither flag is present,
//! [`mentions_indoor`] scans the listing's free text. The predicate is kept
//! separate so it can be replaced with a richer classifier without touching
//! scoring.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::preferences::{coerce_bool, coerce_slider};

/// Physical size bucket of a pet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Small,
    /// Assumed when the listing does not say.
    #[default]
    Medium,
    Large,
}

impl PetSize {
    fn from_value(value: &Value) -> Self {
        match value.as_str().map(|s| s.trim().to_lowercase()).as_deref() {
            Some("small") => PetSize::Small,
            Some("large") => PetSize::Large,
            _ => PetSize::Medium,
        }
    }
}

/// Canonical, partially-known representation of a pet's behavioral and
/// physical attributes.
///
/// `None` means the listing did not document the trait. Slider traits mirror
/// the preference sliders on the same 1..=5 scale; `noise_tolerance` pairs
/// with the adopter's `vocality_tolerance`, `alone_hours_ok` with
/// `home_alone_hours`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitVector {
    pub energy_level: Option<i64>,
    pub sociability: Option<i64>,
    pub noise_tolerance: Option<i64>,
    pub training_comfort: Option<i64>,
    pub alone_hours_ok: Option<i64>,
    /// Explicit flag, or inferred from listing text via [`mentions_indoor`].
    pub indoor_only: Option<bool>,
    pub apartment_friendly: Option<bool>,
    pub kid_friendly: Option<bool>,
    pub other_pets_friendly: Option<bool>,
    pub size: PetSize,
}

/// Case-insensitive scan of the listing's temperament and description text
/// for the token "indoor".
///
/// Deliberately crude: it exists as a named, isolated predicate precisely so
/// a smarter classifier can replace it later.
pub fn mentions_indoor(pet: &Value) -> bool {
    ["temperament", "description"].iter().any(|key| {
        pet.get(*key)
            .and_then(Value::as_str)
            .map(|text| text.to_lowercase().contains("indoor"))
            .unwrap_or(false)
    })
}

/// Returns the structured-traits value for `canonical_key`, falling back to
/// the record's legacy flat field `legacy_key`.
fn resolve<'a>(
    record: &'a Map<String, Value>,
    structured: Option<&'a Map<String, Value>>,
    canonical_key: &str,
    legacy_key: &str,
) -> Option<&'a Value> {
    structured
        .and_then(|traits| traits.get(canonical_key))
        .or_else(|| record.get(legacy_key))
}

/// Normalizes an arbitrary pet record into a [`TraitVector`].
///
/// Total function: malformed or entirely missing data yields a vector with
/// all fields `None` except `size`, which defaults to [`PetSize::Medium`].
/// New listings commonly lack rich trait data and must still be scoreable.
/// `pet` is expected to be a JSON object; any other shape degrades to that
/// same all-unknown vector.
pub fn normalize_traits(pet: &Value) -> TraitVector {
    let empty = Map::new();
    let record = pet.as_object().unwrap_or(&empty);
    let structured = record.get("traits").and_then(Value::as_object);

    let slider = |canonical: &str, legacy: &str| {
        resolve(record, structured, canonical, legacy).and_then(coerce_slider)
    };
    let flag = |canonical: &str, legacy: &str| {
        resolve(record, structured, canonical, legacy).map(coerce_bool)
    };

    TraitVector {
        energy_level: slider("energyLevel", "energyLevel"),
        sociability: slider("sociability", "sociability"),
        noise_tolerance: slider("noiseTolerance", "vocality"),
        training_comfort: slider("trainingComfort", "trainability"),
        alone_hours_ok: slider("aloneHoursOk", "independence"),
        indoor_only: flag("indoorOnly", "indoorOnly")
            .or_else(|| mentions_indoor(pet).then_some(true)),
        apartment_friendly: flag("apartmentFriendly", "apartmentFriendly"),
        kid_friendly: flag("kidFriendly", "goodWithKids"),
        other_pets_friendly: flag("otherPetsFriendly", "goodWithPets"),
        size: resolve(record, structured, "size", "size")
            .map(PetSize::from_value)
            .unwrap_or_default(),
    }
}
