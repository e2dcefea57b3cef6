//! The Comfort Pipeline
//!
//! Computes PMV and PPD from normalized inputs in five pure stages:
//!
//! ```text
//! inputs ──► vapor pressure ──► surface solve ──► heat balance ──► PPD
//!                (4.2)             (4.3)           PMV (4.4)      (4.5)
//! ```
//!
//! Data flows strictly forward; no stage holds state between calls, so
//! concurrent assessments need no coordination.
//!
//! ## Failure containment
//!
//! The pipeline never reports failure. Degenerate numerics are contained
//! where they arise:
//!
//! 1. **Input layer**: missing/non-finite inputs replaced with defaults
//!    ([`crate::inputs`])
//! 2. **Numerical layer**: vapor-pressure overflow reset to zero; a
//!    diverging surface iteration frozen at its last stable estimate
//! 3. **Output layer**: a non-finite heat balance falls back to a linear
//!    PMV approximation
//!
//! Whatever happens internally, [`Assessment`] carries two finite numbers
//! inside their documented ranges.

// Optional logging: warnings about degraded computations (non-convergence,
// fallback activation) are emitted only when the `log` feature is on.
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

mod balance;
mod surface;
mod vapor;

pub use balance::predicted_percentage_dissatisfied;

use crate::constants::physics::{PMV_MAX, PMV_MIN};
use crate::inputs::{Inputs, RawInputs};

/// Result of a thermal comfort assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    /// Predicted Mean Vote on the ASHRAE 7-point scale, within [-3, 3],
    /// rounded to 2 decimals. 0 is thermally neutral.
    pub pmv: f32,

    /// Predicted Percentage Dissatisfied, within [0, 100] %, rounded to
    /// 1 decimal.
    pub ppd: f32,
}

impl Assessment {
    /// Build the final outputs from a raw (finite) mean vote.
    ///
    /// The vote is rounded to 2 decimals and clamped to the scale; PPD is
    /// derived from the clamped vote, so the two outputs are always
    /// consistent with each other.
    fn from_raw_vote(raw_pmv: f32) -> Self {
        let pmv = (libm::roundf(raw_pmv * 100.0) / 100.0).clamp(PMV_MIN, PMV_MAX);
        Self {
            pmv,
            ppd: predicted_percentage_dissatisfied(pmv),
        }
    }

    /// Nearest point on the 7-point sensation scale for this vote.
    pub fn sensation(&self) -> ThermalSensation {
        ThermalSensation::from_pmv(self.pmv)
    }
}

/// Assess thermal comfort from raw survey inputs.
///
/// Total over its domain: missing and non-finite inputs are normalized per
/// [`crate::inputs`], and the returned values are always finite, with PMV
/// in [-3, 3] and PPD in [0, 100].
pub fn assess(raw: &RawInputs) -> Assessment {
    assess_normalized(&Inputs::from_raw(raw))
}

/// Assess thermal comfort from six plain values.
///
/// Equivalent to [`assess`] with every field present; NaN and infinities
/// are replaced by defaults. Argument order follows the conventional
/// Fanger parameter list (ta, tr, vel, rh, met, clo).
pub fn assess_values(
    air_temp: f32,
    radiant_temp: f32,
    air_velocity: f32,
    humidity: f32,
    metabolic_rate: f32,
    clothing: f32,
) -> Assessment {
    assess_normalized(&Inputs::new(
        air_temp,
        radiant_temp,
        air_velocity,
        humidity,
        metabolic_rate,
        clothing,
    ))
}

/// Assess thermal comfort from already-normalized inputs.
pub fn assess_normalized(inputs: &Inputs) -> Assessment {
    let vapor_pressure = vapor::partial_pressure(inputs.air_temp, inputs.humidity);
    let solved = surface::solve(inputs);
    let raw_pmv = balance::predicted_mean_vote(inputs, vapor_pressure, &solved);
    Assessment::from_raw_vote(raw_pmv)
}

/// The ASHRAE 7-point thermal sensation scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThermalSensation {
    /// Vote -3
    Cold,
    /// Vote -2
    Cool,
    /// Vote -1
    SlightlyCool,
    /// Vote 0
    Neutral,
    /// Vote +1
    SlightlyWarm,
    /// Vote +2
    Warm,
    /// Vote +3
    Hot,
}

impl ThermalSensation {
    /// Scale value of this sensation, -3 (cold) to +3 (hot).
    pub fn vote(&self) -> i8 {
        match self {
            Self::Cold => -3,
            Self::Cool => -2,
            Self::SlightlyCool => -1,
            Self::Neutral => 0,
            Self::SlightlyWarm => 1,
            Self::Warm => 2,
            Self::Hot => 3,
        }
    }

    /// Sensation for a survey vote, if it is on the scale.
    pub fn from_vote(vote: i8) -> Option<Self> {
        match vote {
            -3 => Some(Self::Cold),
            -2 => Some(Self::Cool),
            -1 => Some(Self::SlightlyCool),
            0 => Some(Self::Neutral),
            1 => Some(Self::SlightlyWarm),
            2 => Some(Self::Warm),
            3 => Some(Self::Hot),
            _ => None,
        }
    }

    /// Nearest scale point for a PMV value; out-of-range votes saturate.
    pub fn from_pmv(pmv: f32) -> Self {
        let vote = libm::roundf(pmv.clamp(PMV_MIN, PMV_MAX)) as i8;
        Self::from_vote(vote).unwrap_or(Self::Neutral)
    }

    /// Human-readable label for survey presentation.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Cool => "Cool",
            Self::SlightlyCool => "Slightly Cool",
            Self::Neutral => "Neutral",
            Self::SlightlyWarm => "Slightly Warm",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_are_rounded_and_clamped() {
        let a = Assessment::from_raw_vote(1.234_567);
        assert_eq!(a.pmv, 1.23);

        let a = Assessment::from_raw_vote(-17.0);
        assert_eq!(a.pmv, -3.0);
        assert_eq!(a.ppd, 99.1);

        let a = Assessment::from_raw_vote(42.0);
        assert_eq!(a.pmv, 3.0);
    }

    #[test]
    fn ppd_derives_from_clamped_vote() {
        // Both saturated votes map to the same dissatisfaction.
        let hot = Assessment::from_raw_vote(10.0);
        let cold = Assessment::from_raw_vote(-10.0);
        assert_eq!(hot.ppd, cold.ppd);
    }

    #[test]
    fn sensation_round_trip() {
        for vote in -3..=3 {
            let sensation = ThermalSensation::from_vote(vote).unwrap();
            assert_eq!(sensation.vote(), vote);
        }
        assert!(ThermalSensation::from_vote(4).is_none());
        assert!(ThermalSensation::from_vote(-4).is_none());
    }

    #[test]
    fn sensation_from_pmv_saturates_and_rounds() {
        assert_eq!(ThermalSensation::from_pmv(0.0), ThermalSensation::Neutral);
        assert_eq!(ThermalSensation::from_pmv(0.49), ThermalSensation::Neutral);
        assert_eq!(
            ThermalSensation::from_pmv(0.51),
            ThermalSensation::SlightlyWarm
        );
        assert_eq!(ThermalSensation::from_pmv(2.6), ThermalSensation::Hot);
        assert_eq!(ThermalSensation::from_pmv(-80.0), ThermalSensation::Cold);
        assert_eq!(ThermalSensation::from_pmv(f32::NAN), ThermalSensation::Neutral);
    }

    #[test]
    fn sensation_labels() {
        assert_eq!(ThermalSensation::Cold.description(), "Cold");
        assert_eq!(
            ThermalSensation::SlightlyWarm.description(),
            "Slightly Warm"
        );
    }
}
