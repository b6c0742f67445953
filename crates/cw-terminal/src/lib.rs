//! # cw-terminal
//!
//! Terminal adapter for churn-wizard: configuration and tracing bootstrap,
//! the clap command line, and the step-by-step prompt views.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod views;
