//! Bank Loan Simulator CLI
//!
//! Runs the loan simulation and prints the event log and a comparison of
//! concurrent and sequential execution.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --initial-funds 50000 --clients 20
//! cargo run -- --mode sequential --seed 42
//! cargo run -- --format csv > outcomes.csv
//! ```
//!
//! # Output Formats
//!
//! - **text**: section headers, timestamped log lines and the comparison block on stdout (default)
//! - **csv**: one row per client per run on stdout; everything else on stderr
//!
//! # Exit Codes
//!
//! - 0: Success, however many loans were rejected
//! - 1: Error (invalid configuration, runtime failure, output failure)

use bank_loan_simulator::cli::{self, CliArgs, OutputFormat};
use bank_loan_simulator::core::EventLog;
use bank_loan_simulator::io::{write_outcomes_csv, ConsoleLog};
use bank_loan_simulator::strategy::{run_comparison, run_single};
use bank_loan_simulator::types::{RunReport, SimulationError};
use std::io::Write;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), SimulationError> {
    let config = args.to_simulation_config()?;
    let concurrency = args.to_concurrency_config();

    // In CSV mode stdout carries only the rows
    let (log, mut report_output): (Arc<dyn EventLog>, Box<dyn Write>) = match args.format {
        OutputFormat::Text => (Arc::new(ConsoleLog::stdout()), Box::new(std::io::stdout())),
        OutputFormat::Csv => (Arc::new(ConsoleLog::stderr()), Box::new(std::io::stderr())),
    };

    let reports: Vec<RunReport> = match args.mode.strategy() {
        Some(strategy) => vec![run_single(
            strategy,
            &config,
            &concurrency,
            log,
            report_output.as_mut(),
        )?],
        None => {
            let comparison = run_comparison(&config, &concurrency, log, report_output.as_mut())?;
            vec![comparison.concurrent, comparison.sequential]
        }
    };

    if args.format == OutputFormat::Csv {
        let refs: Vec<&RunReport> = reports.iter().collect();
        write_outcomes_csv(&refs, &mut std::io::stdout())?;
    }

    Ok(())
}
