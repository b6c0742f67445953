//! Use case for submitting the single-page form.

use std::sync::Arc;

use cw_core::error::PredictionError;
use cw_core::legacy::LegacyFormRecord;
use cw_core::ports::PredictionPort;
use cw_core::prediction::{PredictionRequest, PredictionResult};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Posts a [`LegacyFormRecord`] verbatim once every field is filled in.
pub struct SubmitLegacyForm {
    port: Arc<dyn PredictionPort>,
}

impl SubmitLegacyForm {
    pub fn new(port: Arc<dyn PredictionPort>) -> Self {
        Self { port }
    }

    pub async fn execute(
        &self,
        record: LegacyFormRecord,
    ) -> Result<PredictionResult, PredictionError> {
        let span = info_span!(
            "usecase.submit_legacy_form.execute",
            submission_id = %Uuid::new_v4(),
        );

        async {
            record.validate()?;

            let result = self
                .port
                .predict(&PredictionRequest::Legacy(record))
                .await
                .inspect_err(|err| warn!(error = %err, "Legacy prediction request failed"))?;

            info!(
                prediction = %result.prediction,
                probability = result.probability,
                "Prediction received"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
