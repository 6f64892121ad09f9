use crate::strategy::{ConcurrencyConfig, StrategyType};
use crate::types::config::{DEFAULT_INITIAL_FUNDS, DEFAULT_NUM_CLIENTS};
use crate::types::{Amount, SimulationConfig, SimulationError};
use clap::{Parser, ValueEnum};

/// Simulate concurrent and sequential loan traffic against a shared bank
#[derive(Parser, Debug)]
#[command(name = "bank-sim")]
#[command(about = "Simulate concurrent vs sequential access to a shared bank ledger", long_about = None)]
pub struct CliArgs {
    /// Starting balance of the bank
    #[arg(
        long = "initial-funds",
        value_name = "AMOUNT",
        default_value_t = Amount::from(DEFAULT_INITIAL_FUNDS),
        help = "Starting balance of the bank"
    )]
    pub initial_funds: Amount,

    /// Number of clients per run
    #[arg(
        long = "clients",
        value_name = "N",
        default_value_t = DEFAULT_NUM_CLIENTS,
        help = "Number of clients per run"
    )]
    pub num_clients: u32,

    /// Which execution mode to run
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "compare",
        help = "Execution mode: 'compare' runs both, or 'concurrent' / 'sequential' alone"
    )]
    pub mode: RunMode,

    /// Number of worker threads for the concurrent strategy
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Worker threads for concurrent execution (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Seed for reproducible client parameters
    #[arg(long = "seed", value_name = "SEED", help = "Seed for the random source")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for the console report, 'csv' for per-client rows"
    )]
    pub format: OutputFormat,
}

/// Execution modes selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    Compare,
    Concurrent,
    Sequential,
}

impl RunMode {
    /// The single strategy to run, or `None` for a comparison
    pub fn strategy(&self) -> Option<StrategyType> {
        match self {
            RunMode::Compare => None,
            RunMode::Concurrent => Some(StrategyType::Concurrent),
            RunMode::Sequential => Some(StrategyType::Sequential),
        }
    }
}

/// Output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
}

impl CliArgs {
    /// Build the simulation configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for non-positive funds or zero clients.
    pub fn to_simulation_config(&self) -> Result<SimulationConfig, SimulationError> {
        let config = SimulationConfig::new(self.initial_funds, self.num_clients)?;
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    /// Build the worker configuration, falling back to defaults
    pub fn to_concurrency_config(&self) -> ConcurrencyConfig {
        match self.workers {
            Some(workers) => ConcurrencyConfig::new(workers),
            None => ConcurrencyConfig::default(),
        }
    }
}
