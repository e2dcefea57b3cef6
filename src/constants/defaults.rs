//! Default Values and Clamp Bounds for Survey Inputs
//!
//! The comfort pipeline is total: a missing or non-finite input is replaced
//! by the default below, and numeric inputs are coerced into their physical
//! bounds. Defaults describe a typical office occupant in a neutral indoor
//! environment.

// ===== DEFAULTS =====

/// Default air temperature (°C).
///
/// Mid-range indoor setpoint; used when the air temperature is missing or
/// not a finite number.
///
/// Source: ASHRAE Standard 55-2020 comfort zone midpoint
pub const DEFAULT_AIR_TEMP_C: f32 = 23.0;

/// Default air velocity (m/s).
///
/// Still indoor air with normal ventilation.
///
/// Source: ASHRAE Standard 55-2020, Section 5.3 (still-air assumption)
pub const DEFAULT_AIR_VELOCITY_M_S: f32 = 0.1;

/// Default relative humidity (%).
///
/// Mid-range indoor humidity.
pub const DEFAULT_HUMIDITY_PCT: f32 = 50.0;

/// Default metabolic rate (MET).
///
/// Seated light work (office typing).
///
/// Source: ISO 7730:2005, Annex B, Table B.1
pub const DEFAULT_METABOLIC_RATE_MET: f32 = 1.2;

/// Default clothing insulation (CLO).
///
/// Light working ensemble (trousers and shirt).
///
/// Source: ISO 7730:2005, Annex C, Table C.1
pub const DEFAULT_CLOTHING_CLO: f32 = 0.5;

// Mean radiant temperature has no fixed default: when missing it is taken
// equal to the (normalized) air temperature, the usual assumption for
// spaces without strong radiant sources.

// ===== CLAMP BOUNDS =====

/// Minimum air velocity fed to the convection model (m/s).
///
/// Below this, natural convection around the body dominates and the forced
/// term is meaningless; lower values are raised to the floor.
///
/// Source: ISO 7730:2005 validity range
pub const MIN_AIR_VELOCITY_M_S: f32 = 0.05;

/// Minimum relative humidity (%).
pub const MIN_HUMIDITY_PCT: f32 = 0.0;

/// Maximum relative humidity (%).
pub const MAX_HUMIDITY_PCT: f32 = 100.0;

/// Minimum metabolic rate (MET).
///
/// Sleeping metabolism; the model is not defined below it.
///
/// Source: ISO 7730:2005, Annex B (0.8 MET = sleeping)
pub const MIN_METABOLIC_RATE_MET: f32 = 0.8;

/// Minimum clothing insulation (CLO). Nude occupant.
pub const MIN_CLOTHING_CLO: f32 = 0.0;
