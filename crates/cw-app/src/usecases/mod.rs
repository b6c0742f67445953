pub mod check_service_health;
pub mod submit_legacy_form;
pub mod submit_prediction;
pub mod wizard;

pub use check_service_health::CheckServiceHealth;
pub use submit_legacy_form::SubmitLegacyForm;
pub use submit_prediction::SubmitPrediction;
pub use wizard::{WizardContext, WizardOrchestrator};
