use std::io::Write;
use std::path::Path;

use anyhow::Context;
use cw_core::encode;

use super::load_form;

/// Print the record the form would be submitted as, without contacting the service.
pub fn run(form_path: &Path, overrides: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    let form = load_form(form_path, overrides)?;
    let completed = form
        .complete()
        .with_context(|| format!("Form is not complete: {}", form_path.display()))?;
    let record = encode(&completed);

    serde_json::to_writer_pretty(&mut *out, &record).context("Failed to write encoded record")?;
    writeln!(out)?;
    Ok(())
}
