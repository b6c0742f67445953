use async_trait::async_trait;
use cw_core::ports::PredictionPort;
use cw_core::prediction::{PredictionRequest, PredictionResult, ServiceHealth};
use cw_core::PredictionError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info_span, warn, Instrument};

use crate::config::PredictionClientConfig;
use crate::error::ClientSetupError;

/// [`PredictionPort`] over HTTP/JSON.
///
/// One `predict` call is one POST; nothing is retried.
pub struct HttpPredictionClient {
    client: reqwest::Client,
    config: PredictionClientConfig,
}

impl HttpPredictionClient {
    pub fn new(config: PredictionClientConfig) -> Result<Self, ClientSetupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }
}

#[async_trait]
impl PredictionPort for HttpPredictionClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let span = info_span!(
            "infra.http.predict",
            endpoint = %self.config.endpoint,
            shape = request.shape(),
        );

        async {
            let response = self
                .client
                .post(self.config.endpoint.clone())
                .json(request)
                .send()
                .await
                .map_err(transport_error)?;

            let result: PredictionResult = read_json(response).await?;
            debug!(prediction = %result.prediction, probability = result.probability, "prediction response");
            Ok(result)
        }
        .instrument(span)
        .await
    }

    async fn health(&self) -> Result<ServiceHealth, PredictionError> {
        let span = info_span!("infra.http.health", endpoint = %self.config.health_endpoint);

        async {
            let response = self
                .client
                .get(self.config.health_endpoint.clone())
                .send()
                .await
                .map_err(transport_error)?;

            read_json(response).await
        }
        .instrument(span)
        .await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, PredictionError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        return Err(status_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|err| {
        warn!(error = %err, "prediction service returned an unreadable body");
        PredictionError::parse(err.to_string())
    })
}

fn transport_error(error: reqwest::Error) -> PredictionError {
    let message = if error.is_timeout() {
        format!("prediction request timed out: {error}")
    } else if error.is_connect() {
        format!("cannot reach prediction service: {error}")
    } else {
        error.to_string()
    };
    warn!(%message, "prediction transport failure");
    PredictionError::transport(message)
}

fn status_error(status: StatusCode, body: &str) -> PredictionError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string));
    warn!(status = status.as_u16(), detail = ?detail, "prediction service answered with an error status");
    PredictionError::http_status(status.as_u16(), detail)
}
