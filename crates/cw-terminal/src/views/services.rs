use std::io::{BufRead, Write};

use cw_core::{FormUpdate, FriendlyFormState, InternetService, MultipleLines, Vocabulary};

use super::prompt::{PromptError, Prompter};

const LINE_OPTIONS: [MultipleLines; 2] = [MultipleLines::No, MultipleLines::Yes];

/// Ask the step 2 questions. Multiple lines is only asked with phone service,
/// add-ons only with internet service.
pub fn collect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    form: &FriendlyFormState,
) -> Result<Vec<FormUpdate>, PromptError> {
    let mut updates = Vec::new();

    let phone = prompter.confirm("Phone service?", form.phone_service)?;
    updates.push(FormUpdate::PhoneService(phone));
    if phone {
        let current = match form.multiple_lines {
            MultipleLines::NoPhoneService => MultipleLines::No,
            other => other,
        };
        let lines = prompter.choose("Multiple lines", &LINE_OPTIONS, Some(current))?;
        updates.push(FormUpdate::MultipleLines(lines));
    }

    let internet = prompter.choose("Internet service", InternetService::ALL, form.internet_service)?;
    updates.push(FormUpdate::InternetService(internet));

    if internet.has_internet() {
        updates.push(FormUpdate::OnlineSecurity(
            prompter.confirm("Online security?", form.online_security)?,
        ));
        updates.push(FormUpdate::OnlineBackup(
            prompter.confirm("Online backup?", form.online_backup)?,
        ));
        updates.push(FormUpdate::DeviceProtection(
            prompter.confirm("Device protection?", form.device_protection)?,
        ));
        updates.push(FormUpdate::TechSupport(
            prompter.confirm("Tech support?", form.tech_support)?,
        ));
        updates.push(FormUpdate::StreamingTv(
            prompter.confirm("Streaming TV?", form.streaming_tv)?,
        ));
        updates.push(FormUpdate::StreamingMovies(
            prompter.confirm("Streaming movies?", form.streaming_movies)?,
        ));
    } else {
        prompter.say("Add-on services need internet service.")?;
    }

    Ok(updates)
}
