//! Use case for submitting the wizard form to the prediction service
//! 将向导表单提交给预测服务的用例

use std::sync::Arc;

use cw_core::encoding::{encode, ModelInputRecord};
use cw_core::error::PredictionError;
use cw_core::form::FriendlyFormState;
use cw_core::ports::PredictionPort;
use cw_core::prediction::{PredictionRequest, PredictionResult};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Use case for submitting a prediction request.
///
/// ## Behavior / 行为
/// - Runs the presence checks; a gap never reaches the network
/// - Encodes the form into the model's input record
/// - Posts it once through the prediction port (no retry)
pub struct SubmitPrediction {
    port: Arc<dyn PredictionPort>,
}

impl SubmitPrediction {
    pub fn new(port: Arc<dyn PredictionPort>) -> Self {
        Self { port }
    }

    /// Validate, encode and submit a wizard form.
    pub async fn execute(
        &self,
        form: &FriendlyFormState,
    ) -> Result<PredictionResult, PredictionError> {
        let completed = form.complete().inspect_err(|gap| {
            warn!(field = gap.field(), "form is incomplete, not submitting");
        })?;
        self.execute_record(encode(&completed)).await
    }

    /// Submit an already encoded record.
    pub async fn execute_record(
        &self,
        record: ModelInputRecord,
    ) -> Result<PredictionResult, PredictionError> {
        let span = info_span!(
            "usecase.submit_prediction.execute",
            submission_id = %Uuid::new_v4(),
        );

        async {
            let request = PredictionRequest::Encoded(record);
            match self.port.predict(&request).await {
                Ok(result) => {
                    info!(
                        prediction = %result.prediction,
                        probability = result.probability,
                        risk = %result.risk_level(),
                        "Prediction received"
                    );
                    Ok(result)
                }
                Err(err) => {
                    warn!(error = %err, "Prediction request failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
