//! Survey Inputs and Normalization
//!
//! The six inputs of the Fanger model arrive from forms, lookup tables, or
//! sensors, and any of them may be missing or garbage (NaN, infinities,
//! negative velocities). Normalization is *total*: every raw tuple maps to
//! a physically valid [`Inputs`] value, with no error path.
//!
//! Rules, per input:
//!
//! | Input | Missing / non-finite | Coercion |
//! |---|---|---|
//! | Air temperature | 23 °C | none |
//! | Mean radiant temperature | = air temperature | none |
//! | Air velocity | 0.1 m/s | floor at 0.05 m/s |
//! | Relative humidity | 50 % | clamp to [0, 100] |
//! | Metabolic rate | 1.2 MET | floor at 0.8 MET |
//! | Clothing insulation | 0.5 CLO | floor at 0 CLO |
//!
//! The radiant default is resolved against the *normalized* air
//! temperature, so a survey with both temperatures missing still describes
//! a consistent environment.

use crate::constants::{
    defaults::{
        DEFAULT_AIR_TEMP_C, DEFAULT_AIR_VELOCITY_M_S, DEFAULT_CLOTHING_CLO, DEFAULT_HUMIDITY_PCT,
        DEFAULT_METABOLIC_RATE_MET, MAX_HUMIDITY_PCT, MIN_AIR_VELOCITY_M_S, MIN_CLOTHING_CLO,
        MIN_HUMIDITY_PCT, MIN_METABOLIC_RATE_MET,
    },
    physics::{
        CLOTHING_AREA_BRANCH_M2K_PER_W, CLO_TO_M2K_PER_W, EXTERNAL_WORK_W_PER_M2, MET_TO_W_PER_M2,
    },
};

/// Raw survey inputs, any of which may be absent.
///
/// This is the shape the surrounding form/survey code produces: each field
/// is optional, and present values are untrusted (they may be NaN or
/// infinite). Convert with [`Inputs::from_raw`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawInputs {
    /// Air temperature [°C]
    pub air_temp: Option<f32>,

    /// Mean radiant temperature [°C]
    pub radiant_temp: Option<f32>,

    /// Air velocity [m/s]
    pub air_velocity: Option<f32>,

    /// Relative humidity [%]
    pub humidity: Option<f32>,

    /// Metabolic rate [MET]
    pub metabolic_rate: Option<f32>,

    /// Clothing insulation [CLO]
    pub clothing: Option<f32>,
}

/// Normalized survey inputs: six finite values inside the model's domain.
///
/// Construct via [`Inputs::new`] or [`Inputs::from_raw`]; both are total.
/// The derived quantities of the heat balance (metabolic heat, SI
/// insulation, clothing area factor) are exposed as methods so every stage
/// computes them the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inputs {
    /// Air temperature [°C]
    pub air_temp: f32,

    /// Mean radiant temperature [°C]
    pub radiant_temp: f32,

    /// Air velocity [m/s], at least 0.05
    pub air_velocity: f32,

    /// Relative humidity [%], within [0, 100]
    pub humidity: f32,

    /// Metabolic rate [MET], at least 0.8
    pub metabolic_rate: f32,

    /// Clothing insulation [CLO], non-negative
    pub clothing: f32,
}

impl Default for Inputs {
    fn default() -> Self {
        Self::from_raw(&RawInputs::default())
    }
}

/// Replace a missing or non-finite value with its default.
fn sanitize(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

impl Inputs {
    /// Normalize six plain values (NaN and infinities allowed).
    pub fn new(
        air_temp: f32,
        radiant_temp: f32,
        air_velocity: f32,
        humidity: f32,
        metabolic_rate: f32,
        clothing: f32,
    ) -> Self {
        Self::from_raw(&RawInputs {
            air_temp: Some(air_temp),
            radiant_temp: Some(radiant_temp),
            air_velocity: Some(air_velocity),
            humidity: Some(humidity),
            metabolic_rate: Some(metabolic_rate),
            clothing: Some(clothing),
        })
    }

    /// Normalize raw survey inputs.
    pub fn from_raw(raw: &RawInputs) -> Self {
        let air_temp = sanitize(raw.air_temp, DEFAULT_AIR_TEMP_C);

        Self {
            air_temp,
            // Without a radiant measurement, assume no strong radiant
            // sources: tr follows the normalized air temperature.
            radiant_temp: sanitize(raw.radiant_temp, air_temp),
            air_velocity: sanitize(raw.air_velocity, DEFAULT_AIR_VELOCITY_M_S)
                .max(MIN_AIR_VELOCITY_M_S),
            humidity: sanitize(raw.humidity, DEFAULT_HUMIDITY_PCT)
                .clamp(MIN_HUMIDITY_PCT, MAX_HUMIDITY_PCT),
            metabolic_rate: sanitize(raw.metabolic_rate, DEFAULT_METABOLIC_RATE_MET)
                .max(MIN_METABOLIC_RATE_MET),
            clothing: sanitize(raw.clothing, DEFAULT_CLOTHING_CLO).max(MIN_CLOTHING_CLO),
        }
    }

    /// Metabolic heat production `M` [W/m²].
    pub fn metabolic_heat(&self) -> f32 {
        self.metabolic_rate * MET_TO_W_PER_M2
    }

    /// Internal heat production `M - W` [W/m²].
    ///
    /// External work is zero for the activities this model covers.
    pub fn internal_heat(&self) -> f32 {
        self.metabolic_heat() - EXTERNAL_WORK_W_PER_M2
    }

    /// Clothing insulation in SI units `Icl` [m²K/W].
    pub fn insulation_si(&self) -> f32 {
        self.clothing * CLO_TO_M2K_PER_W
    }

    /// Clothing area factor `fcl` (clothed vs. nude surface area).
    pub fn clothing_area_factor(&self) -> f32 {
        let icl = self.insulation_si();
        if icl > CLOTHING_AREA_BRANCH_M2K_PER_W {
            1.05 + 0.645 * icl
        } else {
            1.0 + 1.29 * icl
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_inputs_use_defaults() {
        let inputs = Inputs::from_raw(&RawInputs::default());

        assert_eq!(inputs.air_temp, 23.0);
        assert_eq!(inputs.radiant_temp, 23.0);
        assert_eq!(inputs.air_velocity, 0.1);
        assert_eq!(inputs.humidity, 50.0);
        assert_eq!(inputs.metabolic_rate, 1.2);
        assert_eq!(inputs.clothing, 0.5);
    }

    #[test]
    fn non_finite_inputs_use_defaults() {
        let inputs = Inputs::new(
            f32::NAN,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::NAN,
            f32::NAN,
        );

        // Air temperature defaults first; radiant then follows it.
        assert_eq!(inputs.air_temp, 23.0);
        assert_eq!(inputs.radiant_temp, 23.0);
        assert_eq!(inputs.air_velocity, 0.1);
        assert_eq!(inputs.humidity, 50.0);
        assert_eq!(inputs.metabolic_rate, 1.2);
        assert_eq!(inputs.clothing, 0.5);
    }

    #[test]
    fn radiant_follows_measured_air_temp() {
        let inputs = Inputs::from_raw(&RawInputs {
            air_temp: Some(28.5),
            ..RawInputs::default()
        });

        assert_eq!(inputs.radiant_temp, 28.5);
    }

    #[test]
    fn out_of_domain_values_are_coerced() {
        let inputs = Inputs::new(21.0, 21.0, 0.0, 130.0, 0.3, -0.2);

        assert_eq!(inputs.air_velocity, 0.05);
        assert_eq!(inputs.humidity, 100.0);
        assert_eq!(inputs.metabolic_rate, 0.8);
        assert_eq!(inputs.clothing, 0.0);

        let inputs = Inputs::new(21.0, 21.0, 0.3, -5.0, 2.0, 1.0);

        assert_eq!(inputs.air_velocity, 0.3);
        assert_eq!(inputs.humidity, 0.0);
        assert_eq!(inputs.metabolic_rate, 2.0);
        assert_eq!(inputs.clothing, 1.0);
    }

    #[test]
    fn extreme_finite_values_are_kept() {
        // Finite garbage is in-domain garbage: normalization only guards
        // against non-finite values and the documented bounds.
        let inputs = Inputs::new(f32::MAX, 24.0, 0.1, 50.0, 1.2, 0.5);
        assert_eq!(inputs.air_temp, f32::MAX);
    }

    #[test]
    fn clothing_area_factor_branches() {
        // 0.5 CLO -> Icl = 0.0775, below the 0.078 branch point
        let light = Inputs::new(23.0, 23.0, 0.1, 50.0, 1.2, 0.5);
        let icl = light.insulation_si();
        assert!((light.clothing_area_factor() - (1.0 + 1.29 * icl)).abs() < 1e-6);

        // 1.0 CLO -> Icl = 0.155, above the branch point
        let heavy = Inputs::new(23.0, 23.0, 0.1, 50.0, 1.2, 1.0);
        let icl = heavy.insulation_si();
        assert!((heavy.clothing_area_factor() - (1.05 + 0.645 * icl)).abs() < 1e-6);
    }

    #[test]
    fn derived_quantities() {
        let inputs = Inputs::default();

        assert!((inputs.metabolic_heat() - 1.2 * 58.15).abs() < 1e-4);
        assert_eq!(inputs.internal_heat(), inputs.metabolic_heat());
        assert!((inputs.insulation_si() - 0.0775).abs() < 1e-6);
    }
}
