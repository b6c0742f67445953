use std::io::Write;
use std::path::Path;

use cw_core::LegacyFormRecord;

use super::read_json_file;
use crate::bootstrap::AppDeps;
use crate::views::results;

/// Post a single-page form record as-is.
pub async fn run(deps: &AppDeps, record_path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let record: LegacyFormRecord = read_json_file(record_path)?;
    let result = deps
        .submit_legacy_form
        .execute(record)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;

    write!(out, "{}", results::render(&result))?;
    Ok(())
}
