//! CSV output of per-client outcomes
//!
//! One row per client per run, with columns:
//! `mode,client,loan,repayment,delay_secs,approved`.
//! Rows are ordered by run, then by client ID.

use crate::types::{ClientId, ClientOutcome, RunReport, SimulationError};
use serde::Serialize;
use std::io::Write;

/// One CSV row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRow {
    pub mode: String,
    pub client: ClientId,
    pub loan: String,
    pub repayment: String,
    pub delay_secs: String,
    pub approved: bool,
}

impl OutcomeRow {
    /// Build the row for `outcome` within the run labelled `mode`
    pub fn new(mode: &str, outcome: &ClientOutcome) -> Self {
        Self {
            mode: mode.to_lowercase(),
            client: outcome.profile.id,
            loan: outcome.profile.loan_amount.to_string(),
            repayment: outcome.profile.repayment_amount.to_string(),
            delay_secs: format!("{:.4}", outcome.profile.delay.as_secs_f64()),
            approved: outcome.approved,
        }
    }
}

/// Write the outcomes of every report as CSV
///
/// # Errors
///
/// Returns `CsvError` or `IoError` if the writer fails.
pub fn write_outcomes_csv(
    reports: &[&RunReport],
    output: &mut dyn Write,
) -> Result<(), SimulationError> {
    let mut writer = csv::Writer::from_writer(output);

    for report in reports {
        let mut outcomes: Vec<&ClientOutcome> = report.outcomes.iter().collect();
        outcomes.sort_by_key(|outcome| outcome.profile.id);

        for outcome in outcomes {
            writer.serialize(OutcomeRow::new(report.label, outcome))?;
        }
    }

    writer.flush()?;
    Ok(())
}
