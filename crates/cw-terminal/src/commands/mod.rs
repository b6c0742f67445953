//! Subcommand implementations. Each writes its report to the given writer.

pub mod encode;
pub mod health;
pub mod legacy;
pub mod predict;
pub mod wizard;

use std::path::Path;

use anyhow::Context;
use cw_core::{FormUpdate, FriendlyFormState};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read and parse a JSON document.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse form file as JSON: {}", path.display()))
}

/// Read a saved wizard form and apply `field=value` overrides on top, in order.
pub(crate) fn load_form(path: &Path, overrides: &[String]) -> anyhow::Result<FriendlyFormState> {
    let form: FriendlyFormState = read_json_file(path)?;
    let updates = overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(form.apply_all(updates))
}

fn parse_override(raw: &str) -> anyhow::Result<FormUpdate> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Override must look like field=value: {raw:?}"))?;
    let update = FormUpdate::parse(key.trim(), value)
        .with_context(|| format!("Invalid override {raw:?}"))?;
    debug!(field = %update.field(), "form override applied");
    Ok(update)
}
