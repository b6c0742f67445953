//! Prediction request and response models.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::encoding::ModelInputRecord;
use crate::legacy::LegacyFormRecord;

/// Label the service uses for a customer predicted to stay.
pub const RETAINED_LABEL: &str = "Stays";

/// Body posted to the prediction endpoint.
///
/// The two shapes are not interchangeable; the endpoint must expect the one
/// being sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionRequest {
    Encoded(ModelInputRecord),
    Legacy(LegacyFormRecord),
}

impl PredictionRequest {
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Encoded(_) => "encoded",
            Self::Legacy(_) => "legacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Open set: "Stays", "Churns", "Leaves", ...
    pub prediction: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub probability: f64,
}

impl PredictionResult {
    pub fn is_retained(&self) -> bool {
        self.prediction == RETAINED_LABEL
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_probability(self.probability)
    }

    /// Churn risk as a percentage, capped at 100 for display bars.
    pub fn risk_percent(&self) -> f64 {
        (self.probability * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Below 0.4 is low, up to and including 0.7 is medium.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.4 {
            Self::Low
        } else if probability <= 0.7 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer of the service's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// The reference service formats probability with two decimals as a string.
// Either way the value must lie in [0, 1].
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("probability is not a number: {text:?}"))
        })?,
    };

    if !(0.0..=1.0).contains(&value) {
        return Err(serde::de::Error::custom(format!(
            "probability {value} is outside [0, 1]"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_probability() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"prediction":"Churns","probability":0.82}"#).unwrap();
        assert_eq!(result.prediction, "Churns");
        assert_eq!(result.probability, 0.82);
        assert!(!result.is_retained());
    }

    #[test]
    fn accepts_string_probability() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"prediction":"Stays","probability":"0.15"}"#).unwrap();
        assert_eq!(result.probability, 0.15);
        assert!(result.is_retained());
    }

    #[test]
    fn rejects_missing_or_garbled_probability() {
        assert!(serde_json::from_str::<PredictionResult>(r#"{"prediction":"Stays"}"#).is_err());
        assert!(serde_json::from_str::<PredictionResult>(
            r#"{"prediction":"Stays","probability":"high"}"#
        )
        .is_err());
    }

    #[test]
    fn rejects_probability_outside_unit_interval() {
        for body in [
            r#"{"prediction":"Stays","probability":"NaN"}"#,
            r#"{"prediction":"Stays","probability":"inf"}"#,
            r#"{"prediction":"Churns","probability":1.7}"#,
            r#"{"prediction":"Stays","probability":-0.3}"#,
        ] {
            assert!(
                serde_json::from_str::<PredictionResult>(body).is_err(),
                "accepted {body}"
            );
        }

        let edge: PredictionResult =
            serde_json::from_str(r#"{"prediction":"Churns","probability":"1"}"#).unwrap();
        assert_eq!(edge.probability, 1.0);
    }

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.399), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.71), RiskLevel::High);
    }

    #[test]
    fn legacy_request_serializes_without_tag() {
        let request = PredictionRequest::Legacy(LegacyFormRecord::default());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("Legacy").is_none());
        assert_eq!(json["gender"], "");
        assert_eq!(request.shape(), "legacy");
    }
}
