use std::sync::Arc;

use cw_core::error::PredictionError;
use cw_core::ports::PredictionPort;
use cw_core::prediction::ServiceHealth;
use tracing::{debug, info_span, Instrument};

/// Query the prediction service's health endpoint.
pub struct CheckServiceHealth {
    port: Arc<dyn PredictionPort>,
}

impl CheckServiceHealth {
    pub fn new(port: Arc<dyn PredictionPort>) -> Self {
        Self { port }
    }

    pub async fn execute(&self) -> Result<ServiceHealth, PredictionError> {
        async {
            let health = self.port.health().await?;
            debug!(status = %health.status, healthy = health.is_healthy(), "Service health");
            Ok(health)
        }
        .instrument(info_span!("usecase.check_service_health.execute"))
        .await
    }
}
