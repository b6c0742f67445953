//! Resolved settings for the HTTP prediction client.

use std::time::Duration;

use cw_core::AppConfig;
use reqwest::Url;

use crate::error::ClientSetupError;

/// Path of the health endpoint relative to the service root.
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionClientConfig {
    pub endpoint: Url,
    pub health_endpoint: Url,
    /// `None` waits for as long as the service takes.
    pub timeout: Option<Duration>,
}

impl PredictionClientConfig {
    /// Build from an endpoint URL, deriving the health endpoint from its host.
    pub fn new(endpoint: &str) -> Result<Self, ClientSetupError> {
        let endpoint = parse_url("endpoint", endpoint)?;
        let health_endpoint = derive_health_endpoint(&endpoint)?;
        Ok(Self {
            endpoint,
            health_endpoint,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Map the configuration DTO. An empty health endpoint means "derive it".
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ClientSetupError> {
        let mut resolved = Self::new(&config.endpoint)?;
        if !config.health_endpoint.trim().is_empty() {
            resolved.health_endpoint = parse_url("health_endpoint", &config.health_endpoint)?;
        }
        resolved.timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        Ok(resolved)
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ClientSetupError> {
    Url::parse(value.trim()).map_err(|err| ClientSetupError::InvalidUrl {
        field,
        value: value.to_string(),
        message: err.to_string(),
    })
}

fn derive_health_endpoint(endpoint: &Url) -> Result<Url, ClientSetupError> {
    endpoint
        .join(HEALTH_PATH)
        .map_err(|err| ClientSetupError::InvalidUrl {
            field: "health_endpoint",
            value: endpoint.to_string(),
            message: err.to_string(),
        })
}
