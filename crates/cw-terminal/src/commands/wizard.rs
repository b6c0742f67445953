//! Interactive wizard loop.
//!
//! Each pass renders the current snapshot, collects one step's answers and
//! dispatches them. Navigation and submission go through the orchestrator;
//! this module never changes the state itself.

use std::io::{BufRead, Write};

use cw_app::WizardOrchestrator;
use cw_core::wizard::WizardStep;
use cw_core::{FormUpdate, FriendlyFormState};
use tracing::debug;

use crate::views::{billing, personal_info, results, services, step_indicator};
use crate::views::{PromptError, Prompter};

/// How the wizard ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardExit {
    /// The user saw a result and declined another prediction.
    Finished,
    /// The user typed `q` at a navigation prompt.
    Quit,
    /// Input ended before the wizard finished.
    InputClosed,
}

enum Navigation {
    Forward,
    Back,
    Quit,
}

pub async fn run<R: BufRead, W: Write>(
    orchestrator: &WizardOrchestrator,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<WizardExit> {
    match drive(orchestrator, prompter).await {
        Ok(exit) => Ok(exit),
        Err(PromptError::InputClosed) => Ok(WizardExit::InputClosed),
        Err(err) => Err(err.into()),
    }
}

async fn drive<R: BufRead, W: Write>(
    orchestrator: &WizardOrchestrator,
    prompter: &mut Prompter<R, W>,
) -> Result<WizardExit, PromptError> {
    loop {
        let snapshot = orchestrator.snapshot().await;

        if let Some(result) = snapshot.result() {
            prompter.say("")?;
            prompter.say(results::render(result))?;
            if prompter.confirm("Make another prediction?", false)? {
                orchestrator.new_prediction().await;
                continue;
            }
            return Ok(WizardExit::Finished);
        }

        let Some(step) = snapshot.current_step() else {
            return Ok(WizardExit::Finished);
        };

        prompter.say("")?;
        prompter.say(step_indicator::render(step))?;
        prompter.say(step_indicator::heading(step))?;
        if let Some(error) = snapshot.error() {
            prompter.say(format!("Error: {}", error.user_message()))?;
        }

        for update in collect_step(prompter, step, &snapshot.form)? {
            orchestrator.update(update).await;
        }

        let snapshot = orchestrator.snapshot().await;
        if !snapshot.can_advance() {
            if let Some(gap) = snapshot.blocking_gap(step) {
                prompter.say(format!("Please complete this step: {gap}"))?;
            }
            continue;
        }

        match navigation(prompter, step)? {
            Navigation::Forward if step.is_last() => {
                prompter.say("Submitting...")?;
                let after = orchestrator.submit().await;
                debug!(state = ?after.state, "wizard submission finished");
            }
            Navigation::Forward => {
                orchestrator.next().await;
            }
            Navigation::Back => {
                orchestrator.previous().await;
            }
            Navigation::Quit => return Ok(WizardExit::Quit),
        }
    }
}

fn collect_step<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    step: WizardStep,
    form: &FriendlyFormState,
) -> Result<Vec<FormUpdate>, PromptError> {
    match step {
        WizardStep::PersonalInfo => personal_info::collect(prompter, form),
        WizardStep::Services => services::collect(prompter, form),
        WizardStep::Billing => billing::collect(prompter, form),
    }
}

fn navigation<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    step: WizardStep,
) -> Result<Navigation, PromptError> {
    let forward = if step.is_last() { "submit" } else { "continue" };
    let back = if step.previous().is_some() { ", b to go back" } else { "" };
    loop {
        let answer = prompter.ask(&format!("Press Enter to {forward}{back}, q to quit:"))?;
        match answer.to_ascii_lowercase().as_str() {
            "" => return Ok(Navigation::Forward),
            "b" if step.previous().is_some() => return Ok(Navigation::Back),
            "q" => return Ok(Navigation::Quit),
            _ => prompter.say("Please press Enter, or type b or q.")?,
        }
    }
}
