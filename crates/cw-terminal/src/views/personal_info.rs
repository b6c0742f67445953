use std::io::{BufRead, Write};

use cw_core::form::MAX_TENURE_MONTHS;
use cw_core::{FormUpdate, FriendlyFormState, Gender, Vocabulary};

use super::prompt::{PromptError, Prompter};

/// Ask the step 1 questions, starting from the current answers.
pub fn collect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    form: &FriendlyFormState,
) -> Result<Vec<FormUpdate>, PromptError> {
    let gender = prompter.choose("Gender", Gender::ALL, form.gender)?;
    let senior = prompter.confirm("Senior citizen (65 or older)?", form.senior_citizen)?;
    let partner = prompter.confirm("Has a partner?", form.partner)?;
    let dependents = prompter.confirm("Has dependents?", form.dependents)?;
    let tenure = prompter.number("Tenure in months", form.tenure, MAX_TENURE_MONTHS)?;

    Ok(vec![
        FormUpdate::Gender(gender),
        FormUpdate::SeniorCitizen(senior),
        FormUpdate::Partner(partner),
        FormUpdate::Dependents(dependents),
        FormUpdate::Tenure(tenure),
    ])
}
