//! Ports implemented by adapters outside the domain.

mod prediction;

pub use prediction::PredictionPort;

#[cfg(test)]
pub use prediction::MockPrediction;
