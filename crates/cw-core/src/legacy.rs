//! Single-page form payload.
//!
//! The single-page form posts every field as a string already spelled in the
//! model's vocabulary, keyed by the form's own camelCase names, and also asks
//! for total charges directly. The wizard's [`crate::ModelInputRecord`] is the
//! canonical request shape; this one is kept for services that still expect
//! the older raw form.

use serde::{Deserialize, Serialize};

use crate::error::ValidationGap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyFormRecord {
    pub gender: String,
    pub senior_citizen: String,
    pub partner: String,
    pub dependents: String,
    pub tenure: String,
    pub phone_service: String,
    pub multiple_lines: String,
    pub internet_service: String,
    pub online_security: String,
    pub online_backup: String,
    pub device_protection: String,
    pub tech_support: String,
    #[serde(rename = "streamingTV")]
    pub streaming_tv: String,
    pub streaming_movies: String,
    pub contract: String,
    pub paperless_billing: String,
    pub payment_method: String,
    pub monthly_charges: String,
    pub total_charges: String,
}

impl LegacyFormRecord {
    fn fields(&self) -> [(&'static str, &str); 19] {
        [
            ("gender", self.gender.as_str()),
            ("seniorCitizen", self.senior_citizen.as_str()),
            ("partner", self.partner.as_str()),
            ("dependents", self.dependents.as_str()),
            ("tenure", self.tenure.as_str()),
            ("phoneService", self.phone_service.as_str()),
            ("multipleLines", self.multiple_lines.as_str()),
            ("internetService", self.internet_service.as_str()),
            ("onlineSecurity", self.online_security.as_str()),
            ("onlineBackup", self.online_backup.as_str()),
            ("deviceProtection", self.device_protection.as_str()),
            ("techSupport", self.tech_support.as_str()),
            ("streamingTV", self.streaming_tv.as_str()),
            ("streamingMovies", self.streaming_movies.as_str()),
            ("contract", self.contract.as_str()),
            ("paperlessBilling", self.paperless_billing.as_str()),
            ("paymentMethod", self.payment_method.as_str()),
            ("monthlyCharges", self.monthly_charges.as_str()),
            ("totalCharges", self.total_charges.as_str()),
        ]
    }

    /// The form can be submitted only when every field is non-empty.
    pub fn validate(&self) -> Result<(), ValidationGap> {
        match self.fields().into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ValidationGap::MissingField { field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LegacyFormRecord {
        LegacyFormRecord {
            gender: "Female".into(),
            senior_citizen: "0".into(),
            partner: "Yes".into(),
            dependents: "No".into(),
            tenure: "24".into(),
            phone_service: "Yes".into(),
            multiple_lines: "No".into(),
            internet_service: "DSL".into(),
            online_security: "Yes".into(),
            online_backup: "No".into(),
            device_protection: "No".into(),
            tech_support: "Yes".into(),
            streaming_tv: "No".into(),
            streaming_movies: "No".into(),
            contract: "One year".into(),
            paperless_billing: "Yes".into(),
            payment_method: "Mailed check".into(),
            monthly_charges: "55.20".into(),
            total_charges: "1324.80".into(),
        }
    }

    #[test]
    fn empty_form_is_invalid_at_first_field() {
        assert_eq!(
            LegacyFormRecord::default().validate(),
            Err(ValidationGap::MissingField { field: "gender" })
        );
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        let mut record = filled();
        assert!(record.validate().is_ok());

        record.total_charges.clear();
        assert_eq!(
            record.validate(),
            Err(ValidationGap::MissingField {
                field: "totalCharges"
            })
        );
    }

    #[test]
    fn serializes_with_form_field_names_and_string_values() {
        let json = serde_json::to_value(filled()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 19);
        assert_eq!(json["seniorCitizen"], "0");
        assert_eq!(json["streamingTV"], "No");
        assert_eq!(json["totalCharges"], "1324.80");
        assert!(object.values().all(|v| v.is_string()));
    }
}
