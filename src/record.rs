//! Survey Records
//!
//! The unit of persistence for a comfort survey: the normalized inputs,
//! the computed indices, and (when the occupant answered) their reported
//! sensation vote for later comparison against the prediction. Storage
//! itself is out of scope: records are plain `Copy` data, serializable
//! with the `serde` feature, and whatever backend the application uses
//! (file, database, browser storage) owns the format around them.

use crate::inputs::{Inputs, RawInputs};
use crate::lookup::Gender;
use crate::model::{assess_normalized, Assessment, ThermalSensation};

/// One completed survey entry: environment, prediction, and response.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveyRecord {
    /// Gender category the clothing ensemble was resolved against
    pub gender: Gender,

    /// Normalized model inputs
    pub inputs: Inputs,

    /// Predicted Mean Vote
    pub pmv: f32,

    /// Predicted Percentage Dissatisfied [%]
    pub ppd: f32,

    /// The occupant's own sensation vote, if reported
    pub reported: Option<ThermalSensation>,
}

impl SurveyRecord {
    /// Normalize raw inputs, run the assessment, and bundle the results.
    pub fn new(gender: Gender, raw: &RawInputs, reported: Option<ThermalSensation>) -> Self {
        let inputs = Inputs::from_raw(raw);
        let Assessment { pmv, ppd } = assess_normalized(&inputs);
        Self {
            gender,
            inputs,
            pmv,
            ppd,
            reported,
        }
    }

    /// Predicted sensation on the 7-point scale.
    pub fn predicted(&self) -> ThermalSensation {
        ThermalSensation::from_pmv(self.pmv)
    }

    /// Difference between the reported and predicted votes, when a vote
    /// was reported. Positive means the occupant felt warmer than
    /// predicted.
    pub fn vote_error(&self) -> Option<i8> {
        self.reported
            .map(|reported| reported.vote() - self.predicted().vote())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_runs_the_pipeline() {
        let raw = RawInputs {
            air_temp: Some(24.0),
            radiant_temp: Some(24.0),
            air_velocity: Some(0.1),
            humidity: Some(50.0),
            metabolic_rate: Some(1.2),
            clothing: Some(0.5),
        };
        let record = SurveyRecord::new(Gender::Other, &raw, None);

        assert!(record.pmv >= -3.0 && record.pmv <= 3.0);
        assert!(record.ppd >= 0.0 && record.ppd <= 100.0);
        assert_eq!(record.inputs.air_temp, 24.0);
        assert!(record.vote_error().is_none());
    }

    #[test]
    fn vote_error_compares_against_prediction() {
        let raw = RawInputs {
            air_temp: Some(24.0),
            ..RawInputs::default()
        };

        // Reference condition predicts SlightlyCool (-1); an occupant who
        // felt warm (+2) disagrees by +3.
        let record = SurveyRecord::new(Gender::Other, &raw, Some(ThermalSensation::Warm));
        assert_eq!(record.predicted(), ThermalSensation::SlightlyCool);
        assert_eq!(record.vote_error(), Some(3));
    }

    #[test]
    fn missing_fields_are_survivable() {
        let record = SurveyRecord::new(Gender::Female, &RawInputs::default(), None);
        assert!(record.pmv.is_finite());
        assert!(record.ppd.is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let record = SurveyRecord::new(Gender::Male, &RawInputs::default(), None);
        let json = serde_json::to_string(&record).unwrap();
        let back: SurveyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
