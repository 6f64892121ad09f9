//! Running strategies side by side
//!
//! Thin orchestration: headers around each run, then the comparison block.
//! Each run gets its own bank and its own random source. With a seed set,
//! both sources start from it, so both runs draw identical client profiles.

use crate::core::{EventLog, RngSource};
use crate::io::{write_comparison, write_section_header};
use crate::strategy::{create_strategy, ConcurrencyConfig, StrategyType};
use crate::types::{RunReport, SimulationConfig, SimulationError};
use std::io::Write;
use std::sync::Arc;

/// Reports of a concurrent and a sequential run with the same configuration
#[derive(Debug, Clone)]
pub struct Comparison {
    pub concurrent: RunReport,
    pub sequential: RunReport,
}

impl Comparison {
    /// How many times faster the concurrent run finished
    ///
    /// `None` if the concurrent run took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        let concurrent = self.concurrent.duration.as_secs_f64();
        if concurrent > 0.0 {
            Some(self.sequential.duration.as_secs_f64() / concurrent)
        } else {
            None
        }
    }
}

/// Run one strategy under a `=== <Label> Execution ===` header
pub fn run_single(
    strategy_type: StrategyType,
    config: &SimulationConfig,
    concurrency: &ConcurrencyConfig,
    log: Arc<dyn EventLog>,
    output: &mut dyn Write,
) -> Result<RunReport, SimulationError> {
    write_section_header(output, &format!("{} Execution", strategy_type.label()))?;
    output.flush()?;

    let strategy = create_strategy(strategy_type, Some(concurrency.clone()));
    let mut source = RngSource::from_seed_option(config.seed);
    strategy.run(config, &mut source, log)
}

/// Run the concurrent strategy, then the sequential one, and compare them
///
/// Writes both section headers and the final comparison block to `output`.
/// Bank log lines and summary lines go to `log`.
pub fn run_comparison(
    config: &SimulationConfig,
    concurrency: &ConcurrencyConfig,
    log: Arc<dyn EventLog>,
    output: &mut dyn Write,
) -> Result<Comparison, SimulationError> {
    let concurrent = run_single(
        StrategyType::Concurrent,
        config,
        concurrency,
        Arc::clone(&log),
        output,
    )?;

    writeln!(output)?;
    let sequential = run_single(
        StrategyType::Sequential,
        config,
        concurrency,
        Arc::clone(&log),
        output,
    )?;

    writeln!(output)?;
    write_comparison(output, &concurrent, &sequential)?;
    output.flush()?;

    let comparison = Comparison {
        concurrent,
        sequential,
    };
    if let Some(speedup) = comparison.speedup() {
        tracing::info!(speedup, "comparison finished");
    }

    Ok(comparison)
}
