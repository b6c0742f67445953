//! Error taxonomy for form submission and prediction.
//! 表单提交与预测的错误分类。

use thiserror::Error;

/// Generic message shown for any non-success HTTP status.
pub const PREDICTION_FAILED_MESSAGE: &str = "Failed to get prediction";

/// A required field is empty or cannot be read.
///
/// Never reaches the network: the wizard keeps the next/submit action
/// disabled while a gap exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationGap {
    #[error("required field `{field}` is empty")]
    MissingField { field: &'static str },

    #[error("field `{field}` is not a number: {value:?}")]
    MalformedNumber { field: &'static str, value: String },
}

impl ValidationGap {
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::MalformedNumber { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error(transparent)]
    ValidationGap(#[from] ValidationGap),

    /// Network unreachable, or the service answered with a non-success status.
    #[error("{message}")]
    TransportFailure {
        status: Option<u16>,
        message: String,
        /// `error` field of the service's JSON body, when it sent one.
        detail: Option<String>,
    },

    /// Body is not JSON or lacks `prediction` / `probability`.
    #[error("unexpected prediction response: {message}")]
    ParseFailure { message: String },
}

impl PredictionError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            status: None,
            message: message.into(),
            detail: None,
        }
    }

    pub fn http_status(status: u16, detail: Option<String>) -> Self {
        Self::TransportFailure {
            status: Some(status),
            message: PREDICTION_FAILED_MESSAGE.to_string(),
            detail,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }

    /// Single line suitable for an error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::TransportFailure {
                message,
                detail: Some(detail),
                ..
            } => format!("{message}: {detail}"),
            other => other.to_string(),
        }
    }
}
