//! Execution strategies
//!
//! This module defines the Strategy pattern for running a whole simulation:
//! building a bank, drawing client profiles and driving every client to
//! completion. Two implementations exist, selectable at runtime:
//!
//! - `ConcurrentStrategy`: every client runs as its own task on a
//!   multi-threaded tokio runtime
//! - `SequentialStrategy`: clients run one after another on the calling thread

use crate::core::{EventLog, RandomSource};
use crate::types::{RunReport, SimulationConfig, SimulationError};
use std::sync::Arc;

pub mod comparison;
pub mod concurrent;
pub mod sequential;

pub use comparison::{run_comparison, run_single, Comparison};
pub use concurrent::{ConcurrencyConfig, ConcurrentStrategy};
pub use sequential::SequentialStrategy;

/// Label of the unit of work that logs run summaries
pub const MAIN_LABEL: &str = "main";

/// Available execution strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyType {
    Concurrent,
    Sequential,
}

impl StrategyType {
    /// Human-readable name, also used as the report label
    pub fn label(&self) -> &'static str {
        match self {
            StrategyType::Concurrent => "Concurrent",
            StrategyType::Sequential => "Sequential",
        }
    }
}

/// Execution strategy trait for complete simulation runs
pub trait ExecutionStrategy: Send + Sync {
    /// Which strategy this is
    fn strategy_type(&self) -> StrategyType;

    /// Run every client of `config` against a fresh bank
    ///
    /// # Arguments
    ///
    /// * `config` - Funds, client count and parameter ranges
    /// * `source` - Random source used to draw client profiles
    /// * `log` - Sink for the bank's per-operation log lines
    ///
    /// # Returns
    ///
    /// * `Ok(RunReport)` once every client has finished
    /// * `Err(SimulationError)` if the run could not be carried out
    ///
    /// Rejected loans are part of a normal run and never produce an error.
    fn run(
        &self,
        config: &SimulationConfig,
        source: &mut dyn RandomSource,
        log: Arc<dyn EventLog>,
    ) -> Result<RunReport, SimulationError>;
}

/// Create an execution strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The strategy to create
/// * `config` - Optional worker configuration (ignored for sequential)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<ConcurrencyConfig>,
) -> Box<dyn ExecutionStrategy> {
    match strategy_type {
        StrategyType::Sequential => Box::new(SequentialStrategy),
        StrategyType::Concurrent => {
            let config = config.unwrap_or_default();
            Box::new(ConcurrentStrategy::new(config))
        }
    }
}
