use std::io::Write;

use crate::bootstrap::AppDeps;

/// Print the service status. Any status other than "healthy" is an error.
pub async fn run(deps: &AppDeps, out: &mut impl Write) -> anyhow::Result<()> {
    let health = deps
        .check_service_health
        .execute()
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;

    writeln!(out, "{}: {}", deps.health_endpoint, health.status)?;
    if !health.is_healthy() {
        anyhow::bail!("Prediction service reports status {:?}", health.status);
    }
    Ok(())
}
