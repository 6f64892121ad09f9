//! Human-readable report output
//!
//! Section headers, the per-run summary line and the final comparison block.
//! Durations are always printed with four decimal places.

use crate::types::RunReport;
use std::io::Write;

/// Write a `=== <title> ===` section header
pub fn write_section_header(output: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(output, "=== {} ===", title)
}

/// Summary line logged after a run, e.g. `[Concurrent] Final funds: $100500 in 1.9876 s`
pub fn summary_line(report: &RunReport) -> String {
    format!(
        "[{}] Final funds: ${} in {:.4} s",
        report.label,
        report.final_balance,
        report.duration.as_secs_f64()
    )
}

/// Write the side-by-side comparison of two runs
pub fn write_comparison(
    output: &mut dyn Write,
    concurrent: &RunReport,
    sequential: &RunReport,
) -> std::io::Result<()> {
    write_section_header(output, "Comparison")?;
    for report in [concurrent, sequential] {
        writeln!(
            output,
            "- {:<10}: Final funds ${}, time {:.4} s",
            report.label,
            report.final_balance,
            report.duration.as_secs_f64()
        )?;
    }
    Ok(())
}
