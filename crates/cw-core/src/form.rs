//! Friendly form state collected by the wizard.
//! 向导收集的表单状态。
//!
//! The wizard never mutates a shared record in place: every widget emits a
//! [`FormUpdate`] message and the owner reduces it into a new
//! [`FriendlyFormState`] snapshot with [`FriendlyFormState::apply`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::ValidationGap;
use crate::vocabulary::{
    parse_category, Contract, Gender, InternetService, MultipleLines, PaymentMethod,
    UnknownCategory, Vocabulary,
};

/// Tenure preselected by the wizard's slider.
pub const DEFAULT_TENURE_MONTHS: u32 = 12;

/// Slider upper bound. Only the UI enforces it; encoding accepts any value.
pub const MAX_TENURE_MONTHS: u32 = 72;

/// Field keys, spelled the way the form posts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Gender,
    SeniorCitizen,
    Partner,
    Dependents,
    Tenure,
    PhoneService,
    MultipleLines,
    InternetService,
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
    Contract,
    PaymentMethod,
    PaperlessBilling,
    MonthlyCharges,
}

impl FormField {
    pub const ALL: [FormField; 18] = [
        Self::Gender,
        Self::SeniorCitizen,
        Self::Partner,
        Self::Dependents,
        Self::Tenure,
        Self::PhoneService,
        Self::MultipleLines,
        Self::InternetService,
        Self::OnlineSecurity,
        Self::OnlineBackup,
        Self::DeviceProtection,
        Self::TechSupport,
        Self::StreamingTv,
        Self::StreamingMovies,
        Self::Contract,
        Self::PaymentMethod,
        Self::PaperlessBilling,
        Self::MonthlyCharges,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::SeniorCitizen => "seniorCitizen",
            Self::Partner => "partner",
            Self::Dependents => "dependents",
            Self::Tenure => "tenure",
            Self::PhoneService => "phoneService",
            Self::MultipleLines => "multipleLines",
            Self::InternetService => "internetService",
            Self::OnlineSecurity => "onlineSecurity",
            Self::OnlineBackup => "onlineBackup",
            Self::DeviceProtection => "deviceProtection",
            Self::TechSupport => "techSupport",
            Self::StreamingTv => "streamingTV",
            Self::StreamingMovies => "streamingMovies",
            Self::Contract => "contract",
            Self::PaymentMethod => "paymentMethod",
            Self::PaperlessBilling => "paperlessBilling",
            Self::MonthlyCharges => "monthlyCharges",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Wizard form state.
///
/// `None` in an optional field is the "nothing selected yet" state of the
/// corresponding picker. Add-on flags are stored as plain booleans even when
/// internet service is absent; the encoder resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendlyFormState {
    // Step 1 - Personal Info
    #[serde(deserialize_with = "empty_as_none")]
    pub gender: Option<Gender>,
    pub senior_citizen: bool,
    pub partner: bool,
    pub dependents: bool,
    pub tenure: u32,

    // Step 2 - Services
    pub phone_service: bool,
    pub multiple_lines: MultipleLines,
    #[serde(deserialize_with = "empty_as_none")]
    pub internet_service: Option<InternetService>,
    pub online_security: bool,
    pub online_backup: bool,
    pub device_protection: bool,
    pub tech_support: bool,
    #[serde(rename = "streamingTV")]
    pub streaming_tv: bool,
    pub streaming_movies: bool,

    // Step 3 - Billing
    #[serde(deserialize_with = "empty_as_none")]
    pub contract: Option<Contract>,
    #[serde(deserialize_with = "empty_as_none")]
    pub payment_method: Option<PaymentMethod>,
    pub paperless_billing: bool,
    pub monthly_charges: String,
}

impl Default for FriendlyFormState {
    fn default() -> Self {
        Self {
            gender: None,
            senior_citizen: false,
            partner: false,
            dependents: false,
            tenure: DEFAULT_TENURE_MONTHS,
            phone_service: true,
            multiple_lines: MultipleLines::No,
            internet_service: None,
            online_security: false,
            online_backup: false,
            device_protection: false,
            tech_support: false,
            streaming_tv: false,
            streaming_movies: false,
            contract: None,
            payment_method: None,
            paperless_billing: true,
            monthly_charges: String::new(),
        }
    }
}

impl FriendlyFormState {
    /// Reduce one update message into a new snapshot.
    ///
    /// Turning phone service off also moves multiple lines to
    /// "No phone service"; turning it back on restores "No".
    pub fn apply(&self, update: FormUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FormUpdate::Gender(value) => next.gender = Some(value),
            FormUpdate::SeniorCitizen(value) => next.senior_citizen = value,
            FormUpdate::Partner(value) => next.partner = value,
            FormUpdate::Dependents(value) => next.dependents = value,
            FormUpdate::Tenure(value) => next.tenure = value,
            FormUpdate::PhoneService(enabled) => {
                next.phone_service = enabled;
                if !enabled {
                    next.multiple_lines = MultipleLines::NoPhoneService;
                } else if next.multiple_lines == MultipleLines::NoPhoneService {
                    next.multiple_lines = MultipleLines::No;
                }
            }
            FormUpdate::MultipleLines(value) => next.multiple_lines = value,
            FormUpdate::InternetService(value) => next.internet_service = Some(value),
            FormUpdate::OnlineSecurity(value) => next.online_security = value,
            FormUpdate::OnlineBackup(value) => next.online_backup = value,
            FormUpdate::DeviceProtection(value) => next.device_protection = value,
            FormUpdate::TechSupport(value) => next.tech_support = value,
            FormUpdate::StreamingTv(value) => next.streaming_tv = value,
            FormUpdate::StreamingMovies(value) => next.streaming_movies = value,
            FormUpdate::Contract(value) => next.contract = Some(value),
            FormUpdate::PaymentMethod(value) => next.payment_method = Some(value),
            FormUpdate::PaperlessBilling(value) => next.paperless_billing = value,
            FormUpdate::MonthlyCharges(value) => next.monthly_charges = value,
        }
        next
    }

    pub fn apply_all(&self, updates: impl IntoIterator<Item = FormUpdate>) -> Self {
        updates
            .into_iter()
            .fold(self.clone(), |state, update| state.apply(update))
    }

    /// Presence check for every required field, in form order.
    pub fn complete(&self) -> Result<CompletedForm, ValidationGap> {
        let gender = require(self.gender, FormField::Gender)?;
        let internet_service = require(self.internet_service, FormField::InternetService)?;
        let contract = require(self.contract, FormField::Contract)?;
        let payment_method = require(self.payment_method, FormField::PaymentMethod)?;
        let monthly_charges = parse_monthly_charges(&self.monthly_charges)?;

        Ok(CompletedForm {
            gender,
            senior_citizen: self.senior_citizen,
            partner: self.partner,
            dependents: self.dependents,
            tenure: self.tenure,
            phone_service: self.phone_service,
            multiple_lines: self.multiple_lines,
            internet_service,
            online_security: self.online_security,
            online_backup: self.online_backup,
            device_protection: self.device_protection,
            tech_support: self.tech_support,
            streaming_tv: self.streaming_tv,
            streaming_movies: self.streaming_movies,
            contract,
            payment_method,
            paperless_billing: self.paperless_billing,
            monthly_charges,
        })
    }
}

/// A form that passed presence checks; the only input the encoder accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedForm {
    pub gender: Gender,
    pub senior_citizen: bool,
    pub partner: bool,
    pub dependents: bool,
    pub tenure: u32,
    pub phone_service: bool,
    pub multiple_lines: MultipleLines,
    pub internet_service: InternetService,
    pub online_security: bool,
    pub online_backup: bool,
    pub device_protection: bool,
    pub tech_support: bool,
    pub streaming_tv: bool,
    pub streaming_movies: bool,
    pub contract: Contract,
    pub payment_method: PaymentMethod,
    pub paperless_billing: bool,
    pub monthly_charges: f64,
}

fn require<T>(value: Option<T>, field: FormField) -> Result<T, ValidationGap> {
    value.ok_or(ValidationGap::MissingField { field: field.key() })
}

/// Parse the monthly charges text field.
pub fn parse_monthly_charges(raw: &str) -> Result<f64, ValidationGap> {
    let field = FormField::MonthlyCharges.key();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationGap::MissingField { field });
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationGap::MalformedNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// A single `(field, value)` change emitted by a step view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    Gender(Gender),
    SeniorCitizen(bool),
    Partner(bool),
    Dependents(bool),
    Tenure(u32),
    PhoneService(bool),
    MultipleLines(MultipleLines),
    InternetService(InternetService),
    OnlineSecurity(bool),
    OnlineBackup(bool),
    DeviceProtection(bool),
    TechSupport(bool),
    StreamingTv(bool),
    StreamingMovies(bool),
    Contract(Contract),
    PaymentMethod(PaymentMethod),
    PaperlessBilling(bool),
    MonthlyCharges(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormUpdateError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` expects yes/no, got {value:?}")]
    InvalidFlag { field: &'static str, value: String },

    #[error("field `{field}` expects a whole number of months, got {value:?}")]
    InvalidTenure { field: &'static str, value: String },

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}

impl FormUpdate {
    pub fn field(&self) -> FormField {
        match self {
            Self::Gender(_) => FormField::Gender,
            Self::SeniorCitizen(_) => FormField::SeniorCitizen,
            Self::Partner(_) => FormField::Partner,
            Self::Dependents(_) => FormField::Dependents,
            Self::Tenure(_) => FormField::Tenure,
            Self::PhoneService(_) => FormField::PhoneService,
            Self::MultipleLines(_) => FormField::MultipleLines,
            Self::InternetService(_) => FormField::InternetService,
            Self::OnlineSecurity(_) => FormField::OnlineSecurity,
            Self::OnlineBackup(_) => FormField::OnlineBackup,
            Self::DeviceProtection(_) => FormField::DeviceProtection,
            Self::TechSupport(_) => FormField::TechSupport,
            Self::StreamingTv(_) => FormField::StreamingTv,
            Self::StreamingMovies(_) => FormField::StreamingMovies,
            Self::Contract(_) => FormField::Contract,
            Self::PaymentMethod(_) => FormField::PaymentMethod,
            Self::PaperlessBilling(_) => FormField::PaperlessBilling,
            Self::MonthlyCharges(_) => FormField::MonthlyCharges,
        }
    }

    /// Build an update from an untyped `(field, value)` pair.
    pub fn parse(key: &str, value: &str) -> Result<Self, FormUpdateError> {
        let field =
            FormField::from_key(key).ok_or_else(|| FormUpdateError::UnknownField(key.to_string()))?;
        let flag = || parse_flag(field, value);

        Ok(match field {
            FormField::Gender => Self::Gender(parse_category(value)?),
            FormField::SeniorCitizen => Self::SeniorCitizen(flag()?),
            FormField::Partner => Self::Partner(flag()?),
            FormField::Dependents => Self::Dependents(flag()?),
            FormField::Tenure => Self::Tenure(value.trim().parse().map_err(|_| {
                FormUpdateError::InvalidTenure {
                    field: field.key(),
                    value: value.to_string(),
                }
            })?),
            FormField::PhoneService => Self::PhoneService(flag()?),
            FormField::MultipleLines => Self::MultipleLines(parse_category(value)?),
            FormField::InternetService => Self::InternetService(parse_category(value)?),
            FormField::OnlineSecurity => Self::OnlineSecurity(flag()?),
            FormField::OnlineBackup => Self::OnlineBackup(flag()?),
            FormField::DeviceProtection => Self::DeviceProtection(flag()?),
            FormField::TechSupport => Self::TechSupport(flag()?),
            FormField::StreamingTv => Self::StreamingTv(flag()?),
            FormField::StreamingMovies => Self::StreamingMovies(flag()?),
            FormField::Contract => Self::Contract(parse_category(value)?),
            FormField::PaymentMethod => Self::PaymentMethod(parse_category(value)?),
            FormField::PaperlessBilling => Self::PaperlessBilling(flag()?),
            FormField::MonthlyCharges => Self::MonthlyCharges(value.trim().to_string()),
        })
    }
}

fn parse_flag(field: FormField, value: &str) -> Result<bool, FormUpdateError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        _ => Err(FormUpdateError::InvalidFlag {
            field: field.key(),
            value: value.to_string(),
        }),
    }
}

/// Treats `""` (the UI's unselected picker) and `null` as `None`.
fn empty_as_none<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Vocabulary,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_category::<V>(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
