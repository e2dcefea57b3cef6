//! Clothing and Activity Lookup Tables
//!
//! Survey forms don't ask occupants for CLO and MET values directly; they
//! ask for a garment ensemble and an activity, and the numeric inputs are
//! resolved against these tables. The tables are pure immutable data,
//! read-only configuration living in flash/rodata rather than mutable
//! process state, so lookups are safe from any context.
//!
//! Two resolution styles are offered, matching how the surrounding survey
//! code wants to behave:
//!
//! - strict ([`clothing_insulation`], [`activity_rate`]): unknown codes
//!   are reported as [`LookupError`] so a form can reject them
//! - defaulting ([`clothing_insulation_or_default`],
//!   [`activity_rate_or_default`]): unknown codes quietly resolve to the
//!   typical-office defaults, the behavior of the original survey
//!
//! Ensemble composition differs by gender category; categories outside
//! the tabulated ones use the gender-neutral table.

use crate::constants::defaults::{DEFAULT_CLOTHING_CLO, DEFAULT_METABOLIC_RATE_MET};
use crate::errors::{LookupError, LookupResult};

/// Gender category keying the clothing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// Male ensemble table
    Male,
    /// Female ensemble table
    Female,
    /// Gender-neutral ensemble table; also the fallback for any category
    /// without its own table
    #[default]
    Other,
}

/// A garment ensemble with its insulation value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmentEnsemble {
    /// Stable code used by survey forms
    pub code: &'static str,

    /// Clothing insulation [CLO]
    pub clo: f32,

    /// Human-readable description
    pub description: &'static str,
}

/// An activity with its metabolic rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityLevel {
    /// Stable code used by survey forms
    pub code: &'static str,

    /// Metabolic rate [MET]
    pub met: f32,

    /// Human-readable description
    pub description: &'static str,
}

/// Garment ensembles for the male category.
pub const MALE_CLOTHING: &[GarmentEnsemble] = &[
    GarmentEnsemble { code: "briefs_only", clo: 0.1, description: "Minimal clothing" },
    GarmentEnsemble { code: "shorts_t_shirt", clo: 0.3, description: "Casual summer wear" },
    GarmentEnsemble { code: "light_trousers_shirt", clo: 0.5, description: "Light office wear" },
    GarmentEnsemble { code: "trousers_shirt_jacket", clo: 0.7, description: "Business casual" },
    GarmentEnsemble { code: "suit_jacket", clo: 0.9, description: "Formal business wear" },
    GarmentEnsemble { code: "heavy_suit_coat", clo: 1.2, description: "Winter formal wear" },
    GarmentEnsemble { code: "thermal_underwear", clo: 0.4, description: "Base layer thermal" },
    GarmentEnsemble { code: "sweater_jacket", clo: 0.8, description: "Casual winter wear" },
    GarmentEnsemble { code: "heavy_coat_scarf", clo: 1.4, description: "Heavy winter outerwear" },
];

/// Garment ensembles for the female category.
pub const FEMALE_CLOTHING: &[GarmentEnsemble] = &[
    GarmentEnsemble { code: "underwear_only", clo: 0.1, description: "Minimal clothing" },
    GarmentEnsemble { code: "shorts_t_shirt", clo: 0.3, description: "Casual summer wear" },
    GarmentEnsemble { code: "light_dress", clo: 0.4, description: "Summer dress" },
    GarmentEnsemble { code: "skirt_blouse", clo: 0.5, description: "Office wear" },
    GarmentEnsemble { code: "trousers_blouse", clo: 0.6, description: "Business casual" },
    GarmentEnsemble { code: "dress_jacket", clo: 0.8, description: "Formal business wear" },
    GarmentEnsemble { code: "thermal_underwear", clo: 0.4, description: "Base layer thermal" },
    GarmentEnsemble { code: "sweater_skirt", clo: 0.7, description: "Casual winter wear" },
    GarmentEnsemble { code: "heavy_coat_scarf", clo: 1.4, description: "Heavy winter outerwear" },
];

/// Gender-neutral garment ensembles.
pub const NEUTRAL_CLOTHING: &[GarmentEnsemble] = &[
    GarmentEnsemble { code: "minimal_clothing", clo: 0.1, description: "Minimal clothing" },
    GarmentEnsemble { code: "light_clothing", clo: 0.3, description: "Light summer wear" },
    GarmentEnsemble { code: "casual_wear", clo: 0.5, description: "Casual everyday wear" },
    GarmentEnsemble { code: "business_casual", clo: 0.7, description: "Business casual" },
    GarmentEnsemble { code: "formal_wear", clo: 0.9, description: "Formal attire" },
    GarmentEnsemble { code: "thermal_base", clo: 0.4, description: "Base layer thermal" },
    GarmentEnsemble { code: "winter_casual", clo: 0.8, description: "Casual winter wear" },
    GarmentEnsemble { code: "heavy_winter", clo: 1.2, description: "Heavy winter outerwear" },
];

/// Activity levels with their metabolic rates.
pub const ACTIVITY_LEVELS: &[ActivityLevel] = &[
    ActivityLevel { code: "sleeping", met: 0.8, description: "Sleeping or lying down" },
    ActivityLevel { code: "seated_rest", met: 1.0, description: "Seated, relaxed" },
    ActivityLevel { code: "seated_light", met: 1.2, description: "Seated, light work" },
    ActivityLevel { code: "standing_light", met: 1.4, description: "Standing, light work" },
    ActivityLevel { code: "walking_slow", met: 2.0, description: "Walking slowly (2 mph)" },
    ActivityLevel { code: "walking_normal", met: 3.0, description: "Walking normally (3 mph)" },
    ActivityLevel { code: "light_exercise", met: 4.0, description: "Light exercise or activity" },
];

/// The garment table for a gender category.
pub fn clothing_for(gender: Gender) -> &'static [GarmentEnsemble] {
    match gender {
        Gender::Male => MALE_CLOTHING,
        Gender::Female => FEMALE_CLOTHING,
        Gender::Other => NEUTRAL_CLOTHING,
    }
}

/// Resolve a garment code to its insulation value [CLO].
pub fn clothing_insulation(gender: Gender, code: &str) -> LookupResult<f32> {
    clothing_for(gender)
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.clo)
        .ok_or(LookupError::UnknownGarment)
}

/// Resolve a garment code, falling back to the default office ensemble
/// (0.5 CLO) for unknown codes.
pub fn clothing_insulation_or_default(gender: Gender, code: &str) -> f32 {
    clothing_insulation(gender, code).unwrap_or(DEFAULT_CLOTHING_CLO)
}

/// Resolve an activity code to its metabolic rate [MET].
pub fn activity_rate(code: &str) -> LookupResult<f32> {
    ACTIVITY_LEVELS
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.met)
        .ok_or(LookupError::UnknownActivity)
}

/// Resolve an activity code, falling back to seated light work (1.2 MET)
/// for unknown codes.
pub fn activity_rate_or_default(code: &str) -> f32 {
    activity_rate(code).unwrap_or(DEFAULT_METABOLIC_RATE_MET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_resolves() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            for entry in clothing_for(gender) {
                assert_eq!(clothing_insulation(gender, entry.code), Ok(entry.clo));
            }
        }
        for entry in ACTIVITY_LEVELS {
            assert_eq!(activity_rate(entry.code), Ok(entry.met));
        }
    }

    #[test]
    fn unknown_codes_error() {
        assert_eq!(
            clothing_insulation(Gender::Male, "space_suit"),
            Err(LookupError::UnknownGarment)
        );
        assert_eq!(activity_rate("sprinting"), Err(LookupError::UnknownActivity));
    }

    #[test]
    fn tables_are_gender_specific() {
        // "light_dress" exists only in the female table.
        assert!(clothing_insulation(Gender::Female, "light_dress").is_ok());
        assert!(clothing_insulation(Gender::Male, "light_dress").is_err());
    }

    #[test]
    fn unknown_codes_default() {
        assert_eq!(clothing_insulation_or_default(Gender::Other, "space_suit"), 0.5);
        assert_eq!(activity_rate_or_default("sprinting"), 1.2);
    }

    #[test]
    fn insulation_values_are_physical() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            for entry in clothing_for(gender) {
                assert!(entry.clo >= 0.0 && entry.clo <= 2.0, "{}", entry.code);
            }
        }
        for entry in ACTIVITY_LEVELS {
            assert!(entry.met >= 0.8 && entry.met <= 4.0, "{}", entry.code);
        }
    }
}
