use cw_core::wizard::{WizardStep, TOTAL_STEPS};

/// One-line progress bar, e.g. `✓ Personal Info ── [2 Services] ── 3 Billing`.
pub fn render(current: WizardStep) -> String {
    WizardStep::ALL
        .iter()
        .map(|step| {
            if step.number() < current.number() {
                format!("✓ {}", step.label())
            } else if *step == current {
                format!("[{} {}]", step.number(), step.label())
            } else {
                format!("{} {}", step.number(), step.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ── ")
}

pub fn heading(current: WizardStep) -> String {
    format!("Step {} of {}: {}", current.number(), TOTAL_STEPS, current.label())
}
