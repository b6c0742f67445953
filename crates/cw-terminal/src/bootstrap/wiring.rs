//! Dependency wiring: config → HTTP adapter → use cases.

use std::sync::Arc;

use anyhow::Context;
use cw_app::{CheckServiceHealth, SubmitLegacyForm, SubmitPrediction, WizardOrchestrator};
use cw_core::ports::PredictionPort;
use cw_core::AppConfig;
use cw_infra::{HttpPredictionClient, PredictionClientConfig};
use tracing::info;

/// Use cases handed to the commands.
#[derive(Clone)]
pub struct AppDeps {
    pub submit_prediction: Arc<SubmitPrediction>,
    pub submit_legacy_form: Arc<SubmitLegacyForm>,
    pub check_service_health: Arc<CheckServiceHealth>,
    /// Where `health` requests go, for display.
    pub health_endpoint: String,
}

impl AppDeps {
    pub fn from_port(port: Arc<dyn PredictionPort>, health_endpoint: impl Into<String>) -> Self {
        Self {
            submit_prediction: Arc::new(SubmitPrediction::new(port.clone())),
            submit_legacy_form: Arc::new(SubmitLegacyForm::new(port.clone())),
            check_service_health: Arc::new(CheckServiceHealth::new(port)),
            health_endpoint: health_endpoint.into(),
        }
    }

    /// A fresh wizard with default form state.
    pub fn wizard(&self) -> WizardOrchestrator {
        WizardOrchestrator::new(self.submit_prediction.clone())
    }
}

/// Build the HTTP adapter from config and wire the use cases onto it.
pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<AppDeps> {
    let client_config = PredictionClientConfig::from_app_config(config)
        .context("Invalid prediction service configuration")?;
    info!(
        endpoint = %client_config.endpoint,
        health_endpoint = %client_config.health_endpoint,
        timeout = ?client_config.timeout,
        "wiring HTTP prediction client"
    );
    let health_endpoint = client_config.health_endpoint.to_string();
    let client = HttpPredictionClient::new(client_config).context("Failed to create HTTP client")?;
    Ok(AppDeps::from_port(Arc::new(client), health_endpoint))
}
