//! The compatibility scoring engine.
//!
//! [`score`] takes a raw pet record and a raw preference payload, normalizes
//! both, and combines nine components — five slider similarities, the
//! home-fit matrix, and three boolean fits — into a weighted score in the
//! configured `[min_score, max_score]` band, together with up to
//! `max_reasons` human-readable match reasons.
//!
//! The engine is a total, deterministic, pure function of its inputs: no
//! allocation outlives the call, nothing is cached, and no input shape causes
//! a panic. Scoring a batch of pets against one preference payload is an
//! order-free map; [`score_batch`] does exactly that after normalizing the
//! preferences once.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ScoreConfig;
use crate::preferences::{normalize_preferences, HomeType, PreferenceVector, DEFAULT_SLIDER};
use crate::traits::{normalize_traits, PetSize, TraitVector};

/// Maximum possible difference between two values on the 1..=5 slider scale.
const SLIDER_SPAN: f64 = 4.0;

/// Result of scoring one pet against one set of adopter preferences.
///
/// Ephemeral by design: constructed fresh per call, never persisted, carries
/// no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Compatibility score, clamped to the configured soft floor/ceiling
    /// (5..=98 by default) so no pet reads as a certain 0% or 100% match.
    pub score: u8,
    /// Up to `max_reasons` human-readable match reasons, in fixed
    /// dimension-priority order.
    pub reasons: Vec<String>,
}

/// Similarity in `[0, 1]` between a trait value and a preference value on
/// the 1..=5 scale. Unknown traits fall back to the neutral midpoint.
///
/// Out-of-range inputs are deliberately not clamped: the arithmetic runs as
/// written and may yield a similarity outside `[0, 1]`. Whether such inputs
/// should instead be clamped or rejected is an open product question; until
/// that is settled this function preserves the permissive behavior.
fn five_point_similarity(trait_value: Option<i64>, preference: i64) -> f64 {
    let value = trait_value.unwrap_or(DEFAULT_SLIDER);
    // Subtract in f64: integer subtraction would overflow on extreme
    // unclamped values, and scoring must never panic.
    1.0 - (value as f64 - preference as f64).abs() / SLIDER_SPAN
}

/// Home-fit component from home type × pet size.
///
/// Apartment suitability is the stricter, safety-relevant constraint, so an
/// explicit `apartmentFriendly` flag can raise an apartment score to at
/// least 0.95. There is intentionally no equivalent override for houses.
fn home_fit(home_type: HomeType, size: PetSize, apartment_friendly: Option<bool>) -> f64 {
    match home_type {
        HomeType::Apartment => {
            let base: f64 = match size {
                PetSize::Small => 1.0,
                PetSize::Medium => 0.75,
                PetSize::Large => 0.4,
            };
            if apartment_friendly == Some(true) {
                base.max(0.95)
            } else {
                base
            }
        }
        HomeType::House => match size {
            PetSize::Large => 1.0,
            PetSize::Medium => 0.85,
            PetSize::Small => 0.7,
        },
    }
}

/// Boolean-fit component shared by the kids, other-pets, and indoor checks.
///
/// When the adopter needs the trait: 1.0 for an explicit yes, 0.2 otherwise —
/// never 0, since the trait may simply be undocumented. When the adopter does
/// not need it: a flat mild positive of 0.8.
fn boolean_fit(needed: bool, trait_flag: Option<bool>) -> f64 {
    if !needed {
        return 0.8;
    }
    if trait_flag == Some(true) {
        1.0
    } else {
        0.2
    }
}

/// Fixed reason sentences, indexed in dimension-priority order.
const REASON_ENERGY: &str = "Energy level lines up with your day-to-day pace.";
const REASON_SOCIABILITY: &str = "Sociability is a close match for the companionship you want.";
const REASON_VOCALITY: &str = "Noise level fits what you can live with.";
const REASON_TRAINABILITY: &str = "Training needs match your comfort level.";
const REASON_INDEPENDENCE: &str = "Comfortable on their own for about as long as you're away.";
const REASON_INDOOR: &str = "Happy living fully indoors, just like you prefer.";
const REASON_APARTMENT: &str = "Known to do well in apartment living.";

/// Derives up to `max_reasons` reasons, walking the dimensions in fixed
/// priority order: energy, sociability, vocality, trainability,
/// independence, indoor, apartment.
///
/// Slider dimensions count as a match when the (midpoint-defaulted) trait is
/// within `near_threshold` of the preference — the same fallback the
/// similarity computation uses, so a score and its explanation never
/// disagree. Boolean dimensions require both sides to be `true`.
fn derive_reasons(traits: &TraitVector, prefs: &PreferenceVector, cfg: &ScoreConfig) -> Vec<String> {
    let near = |trait_value: Option<i64>, preference: i64| {
        let value = trait_value.unwrap_or(DEFAULT_SLIDER);
        (value as f64 - preference as f64).abs() <= cfg.near_threshold as f64
    };

    let candidates: [(bool, &str); 7] = [
        (near(traits.energy_level, prefs.energy_level), REASON_ENERGY),
        (near(traits.sociability, prefs.sociability), REASON_SOCIABILITY),
        (
            near(traits.noise_tolerance, prefs.vocality_tolerance),
            REASON_VOCALITY,
        ),
        (
            near(traits.training_comfort, prefs.training_comfort),
            REASON_TRAINABILITY,
        ),
        (
            near(traits.alone_hours_ok, prefs.home_alone_hours),
            REASON_INDEPENDENCE,
        ),
        (
            traits.indoor_only == Some(true) && prefs.indoor_preferred,
            REASON_INDOOR,
        ),
        (
            traits.apartment_friendly == Some(true) && prefs.home_type == HomeType::Apartment,
            REASON_APARTMENT,
        ),
    ];

    let mut reasons = Vec::new();
    for (matched, sentence) in candidates {
        if reasons.len() >= cfg.max_reasons {
            break;
        }
        if matched {
            reasons.push(sentence.to_string());
        }
    }
    reasons
}

/// Scores two already-normalized vectors against each other.
///
/// Total function: no input produces a panic, and the score always lands in
/// `[cfg.min_score, cfg.max_score]`.
pub fn score_vectors(
    traits: &TraitVector,
    prefs: &PreferenceVector,
    cfg: &ScoreConfig,
) -> ScoreResult {
    let w = &cfg.weights;

    let energy = five_point_similarity(traits.energy_level, prefs.energy_level);
    let sociability = five_point_similarity(traits.sociability, prefs.sociability);
    let vocality = five_point_similarity(traits.noise_tolerance, prefs.vocality_tolerance);
    let trainability = five_point_similarity(traits.training_comfort, prefs.training_comfort);
    let independence = five_point_similarity(traits.alone_hours_ok, prefs.home_alone_hours);
    let home = home_fit(prefs.home_type, traits.size, traits.apartment_friendly);
    let kids = boolean_fit(prefs.has_kids, traits.kid_friendly);
    let other_pets = boolean_fit(prefs.has_other_pets, traits.other_pets_friendly);
    let indoor = boolean_fit(prefs.indoor_preferred, traits.indoor_only);

    let weighted = energy * w.energy
        + sociability * w.sociability
        + vocality * w.vocality
        + trainability * w.trainability
        + independence * w.independence
        + home * w.home
        + kids * w.kids
        + other_pets * w.other_pets
        + indoor * w.indoor;

    let score = (weighted * 100.0)
        .round()
        .clamp(f64::from(cfg.min_score), f64::from(cfg.max_score)) as u8;
    let reasons = derive_reasons(traits, prefs, cfg);

    debug!(
        score,
        reasons = reasons.len(),
        species = %prefs.species,
        "score_computed"
    );

    ScoreResult { score, reasons }
}

/// Scores a raw pet record against a raw preference payload with explicit
/// configuration.
///
/// Both inputs are expected to be JSON objects; any other shape degrades to
/// the corresponding all-defaults vector rather than failing (see
/// [`normalize_preferences`] and [`normalize_traits`]).
pub fn score_with_config(pet: &Value, raw_preferences: &Value, cfg: &ScoreConfig) -> ScoreResult {
    let prefs = normalize_preferences(raw_preferences);
    let traits = normalize_traits(pet);
    score_vectors(&traits, &prefs, cfg)
}

/// Scores a raw pet record against a raw preference payload using the
/// default configuration.
pub fn score(pet: &Value, raw_preferences: &Value) -> ScoreResult {
    score_with_config(pet, raw_preferences, &ScoreConfig::default())
}

/// Scores a batch of pets against one preference payload.
///
/// Normalizes the preferences once, then maps over the pets in order.
/// Results line up index-for-index with `pets`.
pub fn score_batch(pets: &[Value], raw_preferences: &Value, cfg: &ScoreConfig) -> Vec<ScoreResult> {
    let prefs = normalize_preferences(raw_preferences);
    pets.iter()
        .map(|pet| score_vectors(&normalize_traits(pet), &prefs, cfg))
        .collect()
}
