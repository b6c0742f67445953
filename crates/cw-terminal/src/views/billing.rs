use std::io::{BufRead, Write};

use cw_core::form::parse_monthly_charges;
use cw_core::{Contract, FormUpdate, FriendlyFormState, PaymentMethod, Vocabulary};

use super::prompt::{PromptError, Prompter};

pub fn collect<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    form: &FriendlyFormState,
) -> Result<Vec<FormUpdate>, PromptError> {
    let contract = prompter.choose("Contract", Contract::ALL, form.contract)?;
    let payment = prompter.choose("Payment method", PaymentMethod::ALL, form.payment_method)?;
    let paperless = prompter.confirm("Paperless billing?", form.paperless_billing)?;
    let charges = prompter.text("Monthly charges ($)", &form.monthly_charges)?;

    if let Some(line) = estimate_line(&charges, form.tenure) {
        prompter.say(line)?;
    }

    Ok(vec![
        FormUpdate::Contract(contract),
        FormUpdate::PaymentMethod(payment),
        FormUpdate::PaperlessBilling(paperless),
        FormUpdate::MonthlyCharges(charges),
    ])
}

/// Total charges preview, shown only once the monthly amount parses.
fn estimate_line(charges: &str, tenure: u32) -> Option<String> {
    let monthly = parse_monthly_charges(charges).ok()?;
    Some(format!(
        "Estimated Total Charges: ${:.2} (${} × {tenure} months)",
        monthly * f64::from(tenure),
        charges.trim(),
    ))
}
