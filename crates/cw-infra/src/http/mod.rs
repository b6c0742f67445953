mod client;

pub use client::HttpPredictionClient;
