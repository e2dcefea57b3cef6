//! Surface-Temperature Solver Parameters
//!
//! The clothing surface temperature has no closed form: it is the fixed
//! point of the surface heat balance and is found by successive
//! substitution. These constants bound that iteration.

/// Maximum rounds of successive substitution.
///
/// The iteration is a contraction for light clothing and converges in a
/// few dozen rounds; for heavy clothing it can oscillate divergently, in
/// which case the non-finite guard (not this cap) usually ends the loop.
/// The cap bounds worst-case work either way.
///
/// Source: published Fanger model solver listings
pub const MAX_SURFACE_ITERATIONS: usize = 150;

/// Convergence tolerance on the surface temperature update (°C).
///
/// Iteration stops once successive estimates differ by less than this.
/// Tighter than sensor accuracy by two orders of magnitude.
pub const SURFACE_CONVERGENCE_TOLERANCE_C: f32 = 0.001;

/// Forced-convection coefficient (W/m²K per √(m/s)).
///
/// `hc = 12.1·√v` for air moving at `v` over the clothed body.
///
/// Source: ISO 7730:2005, Equation (6)
pub const FORCED_CONVECTION_COEFF: f32 = 12.1;

/// Natural-convection coefficient (W/m²K per K^0.25).
///
/// `hc = 2.38·|tcl − ta|^0.25` for buoyancy-driven flow; the larger of the
/// forced and natural coefficients is used.
///
/// Source: ISO 7730:2005, Equation (6)
pub const NATURAL_CONVECTION_COEFF: f32 = 2.38;

/// Exponent of the natural-convection temperature difference.
pub const NATURAL_CONVECTION_EXPONENT: f32 = 0.25;

/// Floor on the surface-to-air temperature difference (°C) before the
/// fractional power is taken.
///
/// A zero base under a fractional exponent is well defined but produces a
/// zero coefficient and a degenerate first iteration; the floor keeps the
/// natural-convection term bounded away from zero.
pub const MIN_TEMP_DELTA_C: f32 = 0.001;
