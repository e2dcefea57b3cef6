//! Constants for ComfortCore
//!
//! Centralized, documented constants used throughout the comfort engine.
//! All numeric values are defined here with their purpose, source, and
//! rationale.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: unit conversions and heat-balance coefficients
//! - **Defaults**: per-input default values and clamp bounds
//! - **Solver**: iteration and convergence parameters
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include documentation with a source
//! 3. Use descriptive names that include units
//!
//! Coefficients that appear in exactly one formula (for example the
//! saturation-pressure exponent) stay as local `const`s next to that
//! formula, where they are easiest to audit against the reference model.

/// Unit conversions and heat-balance coefficients from the Fanger model.
pub mod physics;

/// Default values and clamp bounds for the six survey inputs.
pub mod defaults;

/// Iteration and convergence parameters for the surface-temperature solver.
pub mod solver;

// Re-export commonly used constants for convenience
pub use physics::{
    CLO_TO_M2K_PER_W, KELVIN_OFFSET_C, MET_TO_W_PER_M2, PMV_MAX, PMV_MIN, PPD_MAX, PPD_MIN,
};

pub use defaults::{
    DEFAULT_AIR_TEMP_C, DEFAULT_AIR_VELOCITY_M_S, DEFAULT_CLOTHING_CLO, DEFAULT_HUMIDITY_PCT,
    DEFAULT_METABOLIC_RATE_MET,
};

pub use solver::{MAX_SURFACE_ITERATIONS, SURFACE_CONVERGENCE_TOLERANCE_C};
