//! churn-wizard application layer
//!
//! Use cases for submitting predictions and the orchestrator that runs the
//! wizard state machine against the prediction port.

pub mod usecases;

pub use usecases::{
    CheckServiceHealth, SubmitLegacyForm, SubmitPrediction, WizardContext, WizardOrchestrator,
};
