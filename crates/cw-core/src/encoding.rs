//! Form-state-to-model-payload transformation.
//! 表单状态到模型输入的编码。
//!
//! [`encode`] maps a [`CompletedForm`] onto the flat, one-hot
//! [`ModelInputRecord`] the prediction service was trained on. The record is
//! a fixed-schema struct: every column is a named field, so a missing or
//! extra column is a compile error rather than a runtime surprise.

use serde::{Deserialize, Serialize};

use crate::form::CompletedForm;
use crate::vocabulary::{
    AddOnState, Contract, Gender, InternetService, MultipleLines, PaymentMethod, YesNo,
};

/// Number of columns in [`ModelInputRecord`].
pub const COLUMN_COUNT: usize = 40;

/// Column names in wire order.
pub const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "gender",
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "tenure",
    "PhoneService",
    "PaperlessBilling",
    "MonthlyCharges",
    "TotalCharges",
    "MultipleLines_No",
    "MultipleLines_No phone service",
    "MultipleLines_Yes",
    "InternetService_DSL",
    "InternetService_Fiber optic",
    "InternetService_No",
    "OnlineSecurity_No",
    "OnlineSecurity_No internet service",
    "OnlineSecurity_Yes",
    "OnlineBackup_No",
    "OnlineBackup_No internet service",
    "OnlineBackup_Yes",
    "DeviceProtection_No",
    "DeviceProtection_No internet service",
    "DeviceProtection_Yes",
    "TechSupport_No",
    "TechSupport_No internet service",
    "TechSupport_Yes",
    "StreamingTV_No",
    "StreamingTV_No internet service",
    "StreamingTV_Yes",
    "StreamingMovies_No",
    "StreamingMovies_No internet service",
    "StreamingMovies_Yes",
    "Contract_Month-to-month",
    "Contract_One year",
    "Contract_Two year",
    "PaymentMethod_Bank transfer (automatic)",
    "PaymentMethod_Credit card (automatic)",
    "PaymentMethod_Electronic check",
    "PaymentMethod_Mailed check",
];

/// Attribute prefixes of the one-hot groups, in wire order.
pub const ONE_HOT_GROUPS: [&str; 10] = [
    "MultipleLines",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "Contract",
    "PaymentMethod",
];

/// Flat record posted to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInputRecord {
    pub gender: Gender,
    #[serde(rename = "SeniorCitizen")]
    pub senior_citizen: u8,
    #[serde(rename = "Partner")]
    pub partner: YesNo,
    #[serde(rename = "Dependents")]
    pub dependents: YesNo,
    pub tenure: u32,
    #[serde(rename = "PhoneService")]
    pub phone_service: YesNo,
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: YesNo,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f64,
    #[serde(rename = "TotalCharges")]
    pub total_charges: f64,

    #[serde(rename = "MultipleLines_No")]
    pub multiple_lines_no: u8,
    #[serde(rename = "MultipleLines_No phone service")]
    pub multiple_lines_no_phone_service: u8,
    #[serde(rename = "MultipleLines_Yes")]
    pub multiple_lines_yes: u8,

    #[serde(rename = "InternetService_DSL")]
    pub internet_service_dsl: u8,
    #[serde(rename = "InternetService_Fiber optic")]
    pub internet_service_fiber_optic: u8,
    #[serde(rename = "InternetService_No")]
    pub internet_service_no: u8,

    #[serde(rename = "OnlineSecurity_No")]
    pub online_security_no: u8,
    #[serde(rename = "OnlineSecurity_No internet service")]
    pub online_security_no_internet_service: u8,
    #[serde(rename = "OnlineSecurity_Yes")]
    pub online_security_yes: u8,

    #[serde(rename = "OnlineBackup_No")]
    pub online_backup_no: u8,
    #[serde(rename = "OnlineBackup_No internet service")]
    pub online_backup_no_internet_service: u8,
    #[serde(rename = "OnlineBackup_Yes")]
    pub online_backup_yes: u8,

    #[serde(rename = "DeviceProtection_No")]
    pub device_protection_no: u8,
    #[serde(rename = "DeviceProtection_No internet service")]
    pub device_protection_no_internet_service: u8,
    #[serde(rename = "DeviceProtection_Yes")]
    pub device_protection_yes: u8,

    #[serde(rename = "TechSupport_No")]
    pub tech_support_no: u8,
    #[serde(rename = "TechSupport_No internet service")]
    pub tech_support_no_internet_service: u8,
    #[serde(rename = "TechSupport_Yes")]
    pub tech_support_yes: u8,

    #[serde(rename = "StreamingTV_No")]
    pub streaming_tv_no: u8,
    #[serde(rename = "StreamingTV_No internet service")]
    pub streaming_tv_no_internet_service: u8,
    #[serde(rename = "StreamingTV_Yes")]
    pub streaming_tv_yes: u8,

    #[serde(rename = "StreamingMovies_No")]
    pub streaming_movies_no: u8,
    #[serde(rename = "StreamingMovies_No internet service")]
    pub streaming_movies_no_internet_service: u8,
    #[serde(rename = "StreamingMovies_Yes")]
    pub streaming_movies_yes: u8,

    #[serde(rename = "Contract_Month-to-month")]
    pub contract_month_to_month: u8,
    #[serde(rename = "Contract_One year")]
    pub contract_one_year: u8,
    #[serde(rename = "Contract_Two year")]
    pub contract_two_year: u8,

    #[serde(rename = "PaymentMethod_Bank transfer (automatic)")]
    pub payment_method_bank_transfer: u8,
    #[serde(rename = "PaymentMethod_Credit card (automatic)")]
    pub payment_method_credit_card: u8,
    #[serde(rename = "PaymentMethod_Electronic check")]
    pub payment_method_electronic_check: u8,
    #[serde(rename = "PaymentMethod_Mailed check")]
    pub payment_method_mailed_check: u8,
}

/// Effective multiple-lines category.
///
/// Without phone service the sentinel wins over whatever is stored. With
/// phone service, a stale sentinel reads as a single line.
pub fn resolve_multiple_lines(phone_service: bool, stored: MultipleLines) -> MultipleLines {
    match (phone_service, stored) {
        (false, _) => MultipleLines::NoPhoneService,
        (true, MultipleLines::NoPhoneService) => MultipleLines::No,
        (true, value) => value,
    }
}

/// Effective tri-state of an internet add-on.
pub fn resolve_add_on(internet: InternetService, enabled: bool) -> AddOnState {
    if !internet.has_internet() {
        AddOnState::NoInternetService
    } else if enabled {
        AddOnState::Yes
    } else {
        AddOnState::No
    }
}

fn hot(set: bool) -> u8 {
    u8::from(set)
}

/// Encode a completed form into the model's input record.
pub fn encode(form: &CompletedForm) -> ModelInputRecord {
    let lines = resolve_multiple_lines(form.phone_service, form.multiple_lines);
    let internet = form.internet_service;
    let security = resolve_add_on(internet, form.online_security);
    let backup = resolve_add_on(internet, form.online_backup);
    let protection = resolve_add_on(internet, form.device_protection);
    let support = resolve_add_on(internet, form.tech_support);
    let tv = resolve_add_on(internet, form.streaming_tv);
    let movies = resolve_add_on(internet, form.streaming_movies);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        multiple_lines = %lines,
        internet_service = %internet,
        contract = %form.contract,
        payment_method = %form.payment_method,
        tenure = form.tenure,
        "encoding form into model input record"
    );

    ModelInputRecord {
        gender: form.gender,
        senior_citizen: hot(form.senior_citizen),
        partner: form.partner.into(),
        dependents: form.dependents.into(),
        tenure: form.tenure,
        phone_service: form.phone_service.into(),
        paperless_billing: form.paperless_billing.into(),
        monthly_charges: form.monthly_charges,
        total_charges: form.monthly_charges * f64::from(form.tenure),

        multiple_lines_no: hot(lines == MultipleLines::No),
        multiple_lines_no_phone_service: hot(lines == MultipleLines::NoPhoneService),
        multiple_lines_yes: hot(lines == MultipleLines::Yes),

        internet_service_dsl: hot(internet == InternetService::Dsl),
        internet_service_fiber_optic: hot(internet == InternetService::FiberOptic),
        internet_service_no: hot(internet == InternetService::No),

        online_security_no: hot(security == AddOnState::No),
        online_security_no_internet_service: hot(security == AddOnState::NoInternetService),
        online_security_yes: hot(security == AddOnState::Yes),

        online_backup_no: hot(backup == AddOnState::No),
        online_backup_no_internet_service: hot(backup == AddOnState::NoInternetService),
        online_backup_yes: hot(backup == AddOnState::Yes),

        device_protection_no: hot(protection == AddOnState::No),
        device_protection_no_internet_service: hot(protection == AddOnState::NoInternetService),
        device_protection_yes: hot(protection == AddOnState::Yes),

        tech_support_no: hot(support == AddOnState::No),
        tech_support_no_internet_service: hot(support == AddOnState::NoInternetService),
        tech_support_yes: hot(support == AddOnState::Yes),

        streaming_tv_no: hot(tv == AddOnState::No),
        streaming_tv_no_internet_service: hot(tv == AddOnState::NoInternetService),
        streaming_tv_yes: hot(tv == AddOnState::Yes),

        streaming_movies_no: hot(movies == AddOnState::No),
        streaming_movies_no_internet_service: hot(movies == AddOnState::NoInternetService),
        streaming_movies_yes: hot(movies == AddOnState::Yes),

        contract_month_to_month: hot(form.contract == Contract::MonthToMonth),
        contract_one_year: hot(form.contract == Contract::OneYear),
        contract_two_year: hot(form.contract == Contract::TwoYear),

        payment_method_bank_transfer: hot(form.payment_method == PaymentMethod::BankTransfer),
        payment_method_credit_card: hot(form.payment_method == PaymentMethod::CreditCard),
        payment_method_electronic_check: hot(form.payment_method == PaymentMethod::ElectronicCheck),
        payment_method_mailed_check: hot(form.payment_method == PaymentMethod::MailedCheck),
    }
}

impl ModelInputRecord {
    /// The category set to 1 in a one-hot group, read back from the record.
    pub fn hot_category(&self, group: &str) -> Option<&'static str> {
        let columns: Vec<(u8, &'static str)> = match group {
            "MultipleLines" => vec![
                (self.multiple_lines_no, "No"),
                (self.multiple_lines_no_phone_service, "No phone service"),
                (self.multiple_lines_yes, "Yes"),
            ],
            "InternetService" => vec![
                (self.internet_service_dsl, "DSL"),
                (self.internet_service_fiber_optic, "Fiber optic"),
                (self.internet_service_no, "No"),
            ],
            "OnlineSecurity" => vec![
                (self.online_security_no, "No"),
                (self.online_security_no_internet_service, "No internet service"),
                (self.online_security_yes, "Yes"),
            ],
            "OnlineBackup" => vec![
                (self.online_backup_no, "No"),
                (self.online_backup_no_internet_service, "No internet service"),
                (self.online_backup_yes, "Yes"),
            ],
            "DeviceProtection" => vec![
                (self.device_protection_no, "No"),
                (self.device_protection_no_internet_service, "No internet service"),
                (self.device_protection_yes, "Yes"),
            ],
            "TechSupport" => vec![
                (self.tech_support_no, "No"),
                (self.tech_support_no_internet_service, "No internet service"),
                (self.tech_support_yes, "Yes"),
            ],
            "StreamingTV" => vec![
                (self.streaming_tv_no, "No"),
                (self.streaming_tv_no_internet_service, "No internet service"),
                (self.streaming_tv_yes, "Yes"),
            ],
            "StreamingMovies" => vec![
                (self.streaming_movies_no, "No"),
                (self.streaming_movies_no_internet_service, "No internet service"),
                (self.streaming_movies_yes, "Yes"),
            ],
            "Contract" => vec![
                (self.contract_month_to_month, "Month-to-month"),
                (self.contract_one_year, "One year"),
                (self.contract_two_year, "Two year"),
            ],
            "PaymentMethod" => vec![
                (self.payment_method_bank_transfer, "Bank transfer (automatic)"),
                (self.payment_method_credit_card, "Credit card (automatic)"),
                (self.payment_method_electronic_check, "Electronic check"),
                (self.payment_method_mailed_check, "Mailed check"),
            ],
            _ => return None,
        };

        let mut set = columns.into_iter().filter(|(value, _)| *value == 1);
        match (set.next(), set.next()) {
            (Some((_, category)), None) => Some(category),
            _ => None,
        }
    }
}
