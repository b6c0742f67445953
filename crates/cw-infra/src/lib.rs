//! Infrastructure adapters for churn-wizard.
//!
//! The only adapter talks HTTP to the churn model service.

pub mod config;
pub mod error;
pub mod http;

pub use config::PredictionClientConfig;
pub use error::ClientSetupError;
pub use http::HttpPredictionClient;
