use std::io::Write;
use std::path::Path;

use super::load_form;
use crate::bootstrap::AppDeps;
use crate::views::results;

pub async fn run(
    deps: &AppDeps,
    form_path: &Path,
    overrides: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let form = load_form(form_path, overrides)?;
    let result = deps
        .submit_prediction
        .execute(&form)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;

    write!(out, "{}", results::render(&result))?;
    Ok(())
}
