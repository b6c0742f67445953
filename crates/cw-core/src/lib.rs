//! # cw-core
//!
//! Core domain models for churn-wizard: the wizard form, the one-hot
//! encoding transform, prediction models and the wizard state machine.
//!
//! This crate contains pure logic without any infrastructure dependencies.

pub mod config;
pub mod encoding;
pub mod error;
pub mod form;
pub mod legacy;
pub mod ports;
pub mod prediction;
pub mod vocabulary;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use encoding::{encode, ModelInputRecord, COLUMN_COUNT, COLUMN_NAMES};
pub use error::{PredictionError, ValidationGap};
pub use form::{CompletedForm, FormField, FormUpdate, FormUpdateError, FriendlyFormState};
pub use legacy::LegacyFormRecord;
pub use ports::PredictionPort;
pub use prediction::{PredictionRequest, PredictionResult, RiskLevel, ServiceHealth};
pub use vocabulary::{
    AddOnState, Contract, Gender, InternetService, MultipleLines, PaymentMethod, Vocabulary, YesNo,
};
pub use wizard::{
    WizardAction, WizardEvent, WizardSnapshot, WizardState, WizardStateMachine, WizardStep,
};
