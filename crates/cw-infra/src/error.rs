use thiserror::Error;

/// Failure to build the HTTP adapter. Request-time failures are
/// [`cw_core::PredictionError`]s instead.
#[derive(Debug, Error)]
pub enum ClientSetupError {
    #[error("invalid {field} URL {value:?}: {message}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
