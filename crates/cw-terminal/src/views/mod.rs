//! Terminal views: one module per wizard step plus the results screen.

pub mod billing;
pub mod personal_info;
pub mod prompt;
pub mod results;
pub mod services;
pub mod step_indicator;

pub use prompt::{PromptError, Prompter};
