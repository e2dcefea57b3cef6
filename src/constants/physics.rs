//! Physical Constants for the Fanger Heat-Balance Model
//!
//! Unit conversions and coefficients shared across the comfort pipeline.
//! Values follow the PMV reference model; where the reference rounds a
//! physical constant (e.g. the Kelvin offset), the rounded value is kept so
//! results stay comparable with published tables.

// ===== UNIT CONVERSIONS =====

/// Metabolic rate conversion factor (W/m² per MET).
///
/// One MET is the heat production of a resting seated adult per unit of
/// body surface area.
///
/// Source: ISO 7730:2005, Annex B
pub const MET_TO_W_PER_M2: f32 = 58.15;

/// Clothing insulation conversion factor (m²K/W per CLO).
///
/// One CLO is the insulation of a typical business suit.
///
/// Source: ISO 7730:2005, Annex C
pub const CLO_TO_M2K_PER_W: f32 = 0.155;

/// Celsius to Kelvin offset used by the radiative exchange terms (K).
///
/// The Fanger model equations use the rounded 273 rather than 273.15;
/// kept so computed surface temperatures match published tables.
///
/// Source: ISO 7730:2005, Equation (3)
pub const KELVIN_OFFSET_C: f32 = 273.0;

// ===== HEAT-BALANCE COEFFICIENTS =====

/// External mechanical work of the occupant (W/m²).
///
/// Zero for the sedentary-to-light activities this model covers; effective
/// internal heat production is `M - W`.
///
/// Source: ISO 7730:2005 (W ≈ 0 for most indoor activities)
pub const EXTERNAL_WORK_W_PER_M2: f32 = 0.0;

/// Combined radiative exchange coefficient (W/m²K⁴), applied to the
/// clothing-area-scaled difference of fourth-power absolute temperatures.
///
/// Equals the Stefan-Boltzmann constant times the effective emissivity and
/// posture factor of a clothed person.
///
/// Source: ISO 7730:2005, Equation (3)
pub const RADIATIVE_EXCHANGE_COEFF: f32 = 3.96e-8;

/// Clothing insulation threshold for the area-factor branch (m²K/W).
///
/// Below this, clothing area grows at 1.29 per unit insulation; above it,
/// at 0.645 from a 1.05 base.
///
/// Source: ISO 7730:2005, Equation (4)
pub const CLOTHING_AREA_BRANCH_M2K_PER_W: f32 = 0.078;

// ===== VAPOR PRESSURE =====

/// Upper clamp for partial water vapor pressure (Pa).
///
/// Caps the saturation-pressure exponential at extreme air temperatures so
/// infinities never reach the heat balance.
pub const VAPOR_PRESSURE_MAX_PA: f32 = 7000.0;

// ===== OUTPUT BOUNDS =====

/// Lower bound of the PMV scale (cold end of the ASHRAE 7-point scale).
pub const PMV_MIN: f32 = -3.0;

/// Upper bound of the PMV scale (hot end of the ASHRAE 7-point scale).
pub const PMV_MAX: f32 = 3.0;

/// Lower bound of the PPD output (%).
///
/// The PPD formula is mathematically ≥ 5% for real votes; the explicit
/// floor guards against future formula edits, not current behavior.
pub const PPD_MIN: f32 = 0.0;

/// Upper bound of the PPD output (%).
pub const PPD_MAX: f32 = 100.0;
