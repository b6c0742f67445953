use async_trait::async_trait;

use crate::error::PredictionError;
use crate::prediction::{PredictionRequest, PredictionResult, ServiceHealth};

/// Remote churn model.
///
/// One call is one round trip: implementations do not retry.
#[async_trait]
pub trait PredictionPort: Send + Sync {
    /// Post a request body and read back the prediction.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError>;

    /// Ask the service whether it is up.
    async fn health(&self) -> Result<ServiceHealth, PredictionError>;
}

#[cfg(test)]
mockall::mock! {
    pub Prediction {}

    #[async_trait]
    impl PredictionPort for Prediction {
        async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError>;
        async fn health(&self) -> Result<ServiceHealth, PredictionError>;
    }
}
