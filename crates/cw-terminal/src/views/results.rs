//! Prediction results screen.

use std::fmt::Write as _;

use cw_core::PredictionResult;

const BAR_WIDTH: usize = 40;

/// Fixed summary shown under every result.
pub const CONTRIBUTING_FACTORS: [&str; 3] = [
    "Contract type and tenure length",
    "Monthly charges and payment method",
    "Internet service and add-on features",
];

pub fn render(result: &PredictionResult) -> String {
    let percent = result.risk_percent();
    let trend = if result.is_retained() { "▲" } else { "▼" };

    let mut out = String::new();
    let _ = writeln!(out, "Prediction Results");
    let _ = writeln!(out, "==================");
    let _ = writeln!(out, "{trend} Prediction: {}", result.prediction);
    let _ = writeln!(out, "Confidence: {:.1}%", result.probability * 100.0);
    let _ = writeln!(
        out,
        "Churn Risk Score: {percent:.1}% ({} Risk)",
        result.risk_level()
    );
    let _ = writeln!(out, "{}", risk_bar(percent));
    let _ = writeln!(out);
    let _ = writeln!(out, "Key Contributing Factors:");
    for factor in CONTRIBUTING_FACTORS {
        let _ = writeln!(out, "  • {factor}");
    }
    out
}

/// `[#####.....]` filled to `percent`, with the 40% and 70% marks underneath.
fn risk_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]\n 0%{:>17}{:>12}{:>13}",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        "40%",
        "70%",
        "100%",
    )
}
