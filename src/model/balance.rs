//! Heat Balance, PMV, and PPD
//!
//! Combines the body's heat production with its six loss paths and maps
//! the imbalance onto the ASHRAE sensation scale. Loss terms follow the
//! reference Fanger model:
//!
//! - skin diffusion + insensible sweat (combined linearized term)
//! - regulatory sweating above the comfort metabolic baseline
//! - latent respiration
//! - dry respiration
//! - radiative exchange at the solved clothing surface
//! - convective exchange at the solved clothing surface
//!
//! A non-finite balance (overflowed surface solve, degenerate inputs)
//! falls back to a linear approximation of PMV around the neutral office
//! condition, so the pipeline's output stays finite for every input.

use crate::constants::physics::{MET_TO_W_PER_M2, PMV_MAX, PMV_MIN, PPD_MAX, PPD_MIN};
use crate::inputs::Inputs;

use super::surface::{radiative_loss, SurfaceSolution};

/// Predicted Mean Vote before output rounding/clamping.
///
/// Finite for every normalized input: the primary heat balance is used
/// when it produces a real number, the linear fallback otherwise.
pub(crate) fn predicted_mean_vote(
    inputs: &Inputs,
    vapor_pressure: f32,
    surface: &SurfaceSolution,
) -> f32 {
    let metabolic = inputs.metabolic_heat();
    let internal = inputs.internal_heat();
    let area_factor = inputs.clothing_area_factor();

    // Skin diffusion and insensible evaporation, linearized in Mw and Pa
    let skin_diffusion = 3.05e-3 * (5733.0 - 6.99 * internal - vapor_pressure);

    // Regulatory sweating; zero or negative below the 1-MET baseline (not
    // floored, matching the reference)
    let sweat = 0.42 * (internal - MET_TO_W_PER_M2);

    // Respiration losses, latent and dry
    let latent_respiration = 1.7e-5 * metabolic * (5867.0 - vapor_pressure);
    let dry_respiration = 0.0014 * metabolic * (34.0 - inputs.air_temp);

    // Surface exchange at the solved clothing state
    let radiative = radiative_loss(area_factor, surface.clothing_temp, inputs.radiant_temp);
    let convective =
        area_factor * surface.convective_coeff * (surface.clothing_temp - inputs.air_temp);

    // Sensation sensitivity falls off exponentially with metabolic rate
    let sensitivity = 0.303 * libm::expf(-0.036 * metabolic) + 0.028;

    let pmv = sensitivity
        * (internal
            - skin_diffusion
            - sweat
            - latent_respiration
            - dry_respiration
            - radiative
            - convective);

    if pmv.is_finite() {
        pmv
    } else {
        log_warn!("heat balance non-finite (pmv = {}); using linear approximation", pmv);
        linear_estimate(inputs)
    }
}

/// Linear PMV surrogate around the neutral office condition
/// (22 °C, 0.5 CLO, 1.2 MET, 50 % RH, 0.1 m/s).
///
/// Used only when the primary balance is non-finite; always returns a
/// finite vote within the scale.
fn linear_estimate(inputs: &Inputs) -> f32 {
    let delta = (inputs.air_temp - 22.0) - 0.5 * (inputs.clothing - 0.5)
        + 0.2 * (inputs.metabolic_rate - 1.2)
        + 0.1 * (inputs.humidity - 50.0) / 10.0
        - 0.6 * (inputs.air_velocity - 0.1);

    (delta / 3.0).clamp(PMV_MIN, PMV_MAX)
}

/// Predicted Percentage Dissatisfied [%] for a mean vote.
///
/// Closed-form transform of PMV; depends only on even powers, so it is
/// symmetric around neutrality, with a 5 % minimum at PMV = 0. The result
/// is rounded to 1 decimal and clamped to [0, 100].
pub fn predicted_percentage_dissatisfied(pmv: f32) -> f32 {
    let ppd =
        100.0 - 95.0 * libm::expf(-0.03353 * libm::powf(pmv, 4.0) - 0.2179 * pmv * pmv);
    (libm::roundf(ppd * 10.0) / 10.0).clamp(PPD_MIN, PPD_MAX)
}
