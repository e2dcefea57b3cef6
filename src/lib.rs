//! Fanger thermal comfort engine for ComfortCore
//!
//! Computes the two standard thermal comfort indices, Predicted Mean Vote
//! (PMV) and Predicted Percentage Dissatisfied (PPD), from six physical and
//! personal inputs, following Fanger's steady-state heat-balance model
//! (ISO 7730 / ASHRAE 55 lineage).
//!
//! Key properties:
//! - Total over its input domain: missing, NaN, and infinite inputs are
//!   normalized, never rejected
//! - Outputs are always finite and inside their documented ranges
//! - Pure and stateless: identical inputs give identical outputs
//! - `no_std` compatible (math via `libm`)
//!
//! ```
//! use comfort_core::{assess_values, ThermalSensation};
//!
//! // Office at 24°C, still air, 50% RH, seated light work, light clothing
//! let result = assess_values(24.0, 24.0, 0.1, 50.0, 1.2, 0.5);
//!
//! assert!(result.pmv >= -3.0 && result.pmv <= 3.0);
//! assert!(result.ppd >= 0.0 && result.ppd <= 100.0);
//! assert_eq!(result.sensation(), ThermalSensation::SlightlyCool);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod inputs;
pub mod lookup;
pub mod model;
pub mod record;

// Public API
pub use errors::{LookupError, LookupResult};
pub use inputs::{Inputs, RawInputs};
pub use lookup::{ActivityLevel, GarmentEnsemble, Gender};
pub use model::{
    assess, assess_values, predicted_percentage_dissatisfied, Assessment, ThermalSensation,
};
pub use record::SurveyRecord;

/// Crate version string from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
