//! Clothing Surface Temperature Solver
//!
//! The clothing surface temperature `tcl` couples the body's insulated
//! heat flow to the radiative and convective exchange with the room, and
//! the convective coefficient itself depends on `tcl`. There is no closed
//! form; the reference model finds `tcl` by successive substitution:
//!
//! ```text
//! tcl ← 35.7 − 0.028·Mw − Icl·(hr_term(tcl) + hc_term(tcl))
//! ```
//!
//! starting from an insulation-weighted guess between air and skin
//! temperature, for at most 150 rounds, stopping when successive estimates
//! agree within 0.001 °C.
//!
//! ## Degenerate cases
//!
//! For light clothing the map is a contraction and converges in a few
//! dozen rounds. For heavier clothing (roughly above 0.7 CLO in still
//! air) it oscillates with growing amplitude until an update overflows;
//! the non-finite update is discarded and the loop freezes at the last
//! stable estimate. Non-convergence is not an error here: the best
//! available estimate flows downstream, where a non-finite heat balance
//! falls back to the linear PMV approximation. Callers cannot distinguish
//! a frozen solve from a converged one; only the optional `log` warning
//! records it.

use crate::constants::{
    physics::{KELVIN_OFFSET_C, RADIATIVE_EXCHANGE_COEFF},
    solver::{
        FORCED_CONVECTION_COEFF, MAX_SURFACE_ITERATIONS, MIN_TEMP_DELTA_C,
        NATURAL_CONVECTION_COEFF, NATURAL_CONVECTION_EXPONENT, SURFACE_CONVERGENCE_TOLERANCE_C,
    },
};
use crate::inputs::Inputs;

/// Equilibrium state of the clothing surface, fixed for the heat balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SurfaceSolution {
    /// Clothing surface temperature [°C]
    pub clothing_temp: f32,

    /// Convective heat transfer coefficient [W/m²K] at that temperature
    pub convective_coeff: f32,
}

/// Radiative loss term [W/m²] between the clothing surface and the mean
/// radiant environment.
pub(crate) fn radiative_loss(area_factor: f32, surface_temp: f32, radiant_temp: f32) -> f32 {
    let surface_k = surface_temp + KELVIN_OFFSET_C;
    let radiant_k = radiant_temp + KELVIN_OFFSET_C;
    RADIATIVE_EXCHANGE_COEFF
        * area_factor
        * (libm::powf(surface_k, 4.0) - libm::powf(radiant_k, 4.0))
}

/// Convective coefficient [W/m²K]: the larger of forced convection from
/// air movement and natural convection from the surface-air temperature
/// difference.
fn convective_coefficient(air_velocity: f32, surface_temp: f32, air_temp: f32) -> f32 {
    let forced = FORCED_CONVECTION_COEFF * libm::sqrtf(air_velocity);
    let delta = libm::fabsf(surface_temp - air_temp).max(MIN_TEMP_DELTA_C);
    let natural = NATURAL_CONVECTION_COEFF * libm::powf(delta, NATURAL_CONVECTION_EXPONENT);
    forced.max(natural)
}

/// One round of successive substitution: the next surface temperature
/// estimate and the convective coefficient used to produce it.
fn next_estimate(inputs: &Inputs, insulation: f32, area_factor: f32, surface_temp: f32) -> (f32, f32) {
    // Skin-temperature line of the reference model: mean skin temperature
    // at comfort drops with metabolic rate.
    const SKIN_TEMP_BASE_C: f32 = 35.7;
    const SKIN_TEMP_METABOLIC_SLOPE: f32 = 0.028;

    let hr_term = radiative_loss(area_factor, surface_temp, inputs.radiant_temp);
    let hc = convective_coefficient(inputs.air_velocity, surface_temp, inputs.air_temp);
    let hc_term = area_factor * hc * (surface_temp - inputs.air_temp);

    let next = SKIN_TEMP_BASE_C - SKIN_TEMP_METABOLIC_SLOPE * inputs.internal_heat()
        - insulation * (hr_term + hc_term);

    (next, hc)
}

/// Solve for the equilibrium clothing surface state.
///
/// Always terminates within [`MAX_SURFACE_ITERATIONS`] rounds and always
/// returns; see the module docs for what "solved" means in the degenerate
/// cases.
pub(crate) fn solve(inputs: &Inputs) -> SurfaceSolution {
    let insulation = inputs.insulation_si();
    let area_factor = inputs.clothing_area_factor();

    // Initial guess: between air and skin temperature, weighted by
    // insulation (heavier clothing starts closer to the air).
    let mut surface_temp =
        inputs.air_temp + (35.5 - inputs.air_temp) / (3.5 * (insulation + 0.1));
    let mut convective_coeff =
        convective_coefficient(inputs.air_velocity, surface_temp, inputs.air_temp);

    let mut converged = false;
    for _ in 0..MAX_SURFACE_ITERATIONS {
        let (next, hc) = next_estimate(inputs, insulation, area_factor, surface_temp);
        convective_coeff = hc;

        // A non-finite update means the oscillation overflowed: discard
        // it and freeze at the last stable estimate.
        if !next.is_finite() {
            break;
        }

        let step = libm::fabsf(next - surface_temp);
        surface_temp = next;
        if step < SURFACE_CONVERGENCE_TOLERANCE_C {
            converged = true;
            break;
        }
    }

    if !converged {
        log_warn!(
            "clothing surface solve stopped before convergence (tcl = {} degC)",
            surface_temp
        );
    }

    SurfaceSolution {
        clothing_temp: surface_temp,
        convective_coeff,
    }
}
