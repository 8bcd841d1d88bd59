//! Adopter preference normalization.
//!
//! Quiz answers arrive as partial JSON objects: any step of the adoption quiz
//! may be skipped, older clients send snake_case keys, and form encoders turn
//! numbers and booleans into strings. [`normalize_preferences`] folds all of
//! that into a fully populated [`PreferenceVector`] so downstream scoring
//! never has to reason about missing fields.
//!
//! # Key resolution
//!
//! Every field is resolved through an explicit, ordered alias chain — the
//! quiz-style camelCase key wins when both spellings are present:
//!
//! | Field | Quiz key | Alias |
//! |-------|----------|-------|
//! | species | `speciesPreference` | `species` |
//! | home type | `homeType` | `home_type` |
//! | energy slider | `energyLevel` | `energy_level` |
//! | sociability slider | `sociability` | — |
//! | vocality slider | `vocalityTolerance` | `vocality_tolerance` |
//! | training slider | `trainingComfort` | `training_comfort` |
//! | alone-hours slider | `homeAloneHours` | `home_alone_hours` |
//! | indoor toggle | `indoorPreferred` | `indoor_preferred` |
//! | kids toggle | `hasKids` | `has_kids` |
//! | other-pets toggle | `hasOtherPets` | `has_other_pets` |
//!
//! Normalization is total: every input, including `{}`, yields a valid
//! vector via defaults. Sliders are deliberately not clamped here; range
//! handling lives in the similarity computation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Neutral midpoint used when a slider answer is absent.
pub const DEFAULT_SLIDER: i64 = 3;

/// The adopter's home situation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeType {
    /// Apartment living. The default, and the stricter fit constraint.
    #[default]
    Apartment,
    /// A house, assumed to have more space.
    House,
}

impl HomeType {
    fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some(s) if s.trim().eq_ignore_ascii_case("house") => HomeType::House,
            _ => HomeType::Apartment,
        }
    }
}

/// Canonical, fully-defaulted representation of an adopter's quiz answers.
///
/// Produced by [`normalize_preferences`]; every field is always present.
/// Slider values are nominally on a 1..=5 scale but are carried through
/// unclamped (see the module docs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceVector {
    /// Preferred species, lowercased. `"any"` when the adopter did not say.
    pub species: String,
    /// Home situation, defaults to [`HomeType::Apartment`].
    pub home_type: HomeType,
    /// Desired pet activity level, 1 (calm) to 5 (very active).
    pub energy_level: i64,
    /// Desired pet sociability, 1 (independent) to 5 (velcro).
    pub sociability: i64,
    /// Tolerance for vocal pets, 1 (needs quiet) to 5 (noise is fine).
    pub vocality_tolerance: i64,
    /// Comfort with training work, 1 (wants turnkey) to 5 (loves training).
    pub training_comfort: i64,
    /// Hours the pet would routinely spend home alone, bucketed 1 to 5.
    pub home_alone_hours: i64,
    /// Adopter wants an indoor-only pet.
    pub indoor_preferred: bool,
    /// Children live in the home.
    pub has_kids: bool,
    /// Other pets live in the home.
    pub has_other_pets: bool,
}

impl Default for PreferenceVector {
    fn default() -> Self {
        Self {
            species: "any".to_string(),
            home_type: HomeType::Apartment,
            energy_level: DEFAULT_SLIDER,
            sociability: DEFAULT_SLIDER,
            vocality_tolerance: DEFAULT_SLIDER,
            training_comfort: DEFAULT_SLIDER,
            home_alone_hours: DEFAULT_SLIDER,
            indoor_preferred: false,
            has_kids: false,
            has_other_pets: false,
        }
    }
}

/// Returns the first value found under any of `keys`, in order.
fn field<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

/// Coerces a JSON value into a slider integer.
///
/// Accepts integers, floats (rounded to nearest), and numeric strings —
/// multi-step quiz frontends routinely stringify slider positions.
pub(crate) fn coerce_slider(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f.round() as i64))
        }
        _ => None,
    }
}

/// Coerces a JSON value into a strict boolean.
///
/// `true`, `"true"`, `"1"`, and `1` all resolve to `true`; everything else,
/// including unknown shapes, resolves to `false`.
pub(crate) fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    }
}

fn slider(map: &Map<String, Value>, keys: &[&str]) -> i64 {
    field(map, keys)
        .and_then(coerce_slider)
        .unwrap_or(DEFAULT_SLIDER)
}

fn toggle(map: &Map<String, Value>, keys: &[&str]) -> bool {
    field(map, keys).map(coerce_bool).unwrap_or(false)
}

/// Normalizes an arbitrary preference payload into a [`PreferenceVector`].
///
/// Total function: there are no error conditions, and an empty map produces
/// the all-defaults vector. `raw` is expected to be a JSON object; any other
/// shape (including `null`) degrades to the all-defaults vector as well —
/// callers remain responsible for rejecting structurally malformed payloads
/// upstream if they care about the distinction.
pub fn normalize_preferences(raw: &Value) -> PreferenceVector {
    let empty = Map::new();
    let map = raw.as_object().unwrap_or(&empty);

    PreferenceVector {
        species: field(map, &["speciesPreference", "species"])
            .and_then(Value::as_str)
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "any".to_string()),
        home_type: field(map, &["homeType", "home_type"])
            .map(HomeType::from_value)
            .unwrap_or_default(),
        energy_level: slider(map, &["energyLevel", "energy_level"]),
        sociability: slider(map, &["sociability"]),
        vocality_tolerance: slider(map, &["vocalityTolerance", "vocality_tolerance"]),
        training_comfort: slider(map, &["trainingComfort", "training_comfort"]),
        home_alone_hours: slider(map, &["homeAloneHours", "home_alone_hours"]),
        indoor_preferred: toggle(map, &["indoorPreferred", "indoor_preferred"]),
        has_kids: toggle(map, &["hasKids", "has_kids"]),
        has_other_pets: toggle(map, &["hasOtherPets", "has_other_pets"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_map_yields_all_defaults() {
        let prefs = normalize_preferences(&json!({}));
        assert_eq!(prefs, PreferenceVector::default());
        assert_eq!(prefs.species, "any");
        assert_eq!(prefs.home_type, HomeType::Apartment);
        assert_eq!(prefs.energy_level, DEFAULT_SLIDER);
        assert!(!prefs.indoor_preferred);
    }

    #[test]
    fn non_object_input_degrades_to_defaults() {
        assert_eq!(normalize_preferences(&Value::Null), PreferenceVector::default());
        assert_eq!(normalize_preferences(&json!("cat")), PreferenceVector::default());
        assert_eq!(normalize_preferences(&json!([1, 2])), PreferenceVector::default());
    }

    #[test]
    fn quiz_key_wins_over_alias() {
        let prefs = normalize_preferences(&json!({
            "speciesPreference": "Dog",
            "species": "cat",
            "energyLevel": 5,
            "energy_level": 1,
        }));
        assert_eq!(prefs.species, "dog");
        assert_eq!(prefs.energy_level, 5);
    }

    #[test]
    fn alias_used_when_quiz_key_absent() {
        let prefs = normalize_preferences(&json!({
            "species": "Rabbit",
            "home_type": "House",
            "vocality_tolerance": 2,
        }));
        assert_eq!(prefs.species, "rabbit");
        assert_eq!(prefs.home_type, HomeType::House);
        assert_eq!(prefs.vocality_tolerance, 2);
    }

    #[test]
    fn species_is_lowercased_and_blank_falls_back() {
        let prefs = normalize_preferences(&json!({ "speciesPreference": "  CAT " }));
        assert_eq!(prefs.species, "cat");

        let prefs = normalize_preferences(&json!({ "speciesPreference": "   " }));
        assert_eq!(prefs.species, "any");
    }

    #[test]
    fn home_type_only_recognizes_house() {
        assert_eq!(
            normalize_preferences(&json!({ "homeType": "house" })).home_type,
            HomeType::House
        );
        assert_eq!(
            normalize_preferences(&json!({ "homeType": "HOUSE" })).home_type,
            HomeType::House
        );
        assert_eq!(
            normalize_preferences(&json!({ "homeType": "houseboat" })).home_type,
            HomeType::Apartment
        );
        assert_eq!(
            normalize_preferences(&json!({ "homeType": 7 })).home_type,
            HomeType::Apartment
        );
    }

    #[test]
    fn sliders_coerce_from_strings_and_floats() {
        let prefs = normalize_preferences(&json!({
            "energyLevel": "4",
            "sociability": 2.6,
            "trainingComfort": " 5 ",
            "homeAloneHours": "3.2",
        }));
        assert_eq!(prefs.energy_level, 4);
        assert_eq!(prefs.sociability, 3);
        assert_eq!(prefs.training_comfort, 5);
        assert_eq!(prefs.home_alone_hours, 3);
    }

    #[test]
    fn unparseable_slider_falls_back_to_neutral() {
        let prefs = normalize_preferences(&json!({
            "energyLevel": "high",
            "sociability": true,
            "vocalityTolerance": null,
        }));
        assert_eq!(prefs.energy_level, DEFAULT_SLIDER);
        assert_eq!(prefs.sociability, DEFAULT_SLIDER);
        assert_eq!(prefs.vocality_tolerance, DEFAULT_SLIDER);
    }

    #[test]
    fn sliders_are_not_clamped_by_normalization() {
        let prefs = normalize_preferences(&json!({ "energyLevel": 9, "sociability": -2 }));
        assert_eq!(prefs.energy_level, 9);
        assert_eq!(prefs.sociability, -2);
    }

    #[test]
    fn booleans_coerce_from_common_representations() {
        let prefs = normalize_preferences(&json!({
            "indoorPreferred": "true",
            "hasKids": 1,
            "hasOtherPets": true,
        }));
        assert!(prefs.indoor_preferred);
        assert!(prefs.has_kids);
        assert!(prefs.has_other_pets);

        let prefs = normalize_preferences(&json!({
            "indoorPreferred": "yes",
            "hasKids": 0,
            "hasOtherPets": "false",
        }));
        assert!(!prefs.indoor_preferred);
        assert!(!prefs.has_kids);
        assert!(!prefs.has_other_pets);
    }
}
