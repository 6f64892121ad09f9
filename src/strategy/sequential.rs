//! Sequential execution strategy
//!
//! Clients run strictly one after another on the calling thread. A client's
//! delay blocks the thread, so the total duration is roughly the sum of the
//! delays of every approved client. With a fixed seed the whole run,
//! including the order of approvals and rejections, is reproducible.

use crate::core::{Bank, Client, EventLog, ProfileGenerator, RandomSource};
use crate::io::summary_line;
use crate::strategy::{ExecutionStrategy, StrategyType, MAIN_LABEL};
use crate::types::{RunReport, SimulationConfig, SimulationError};
use std::sync::Arc;
use std::time::Instant;

/// Sequential execution strategy
///
/// Each profile is drawn at the moment its client is processed rather than
/// in a batch up front. The distributions are the same as the concurrent
/// strategy's, and with the same seed the same profiles come out.
#[derive(Debug, Clone, Copy)]
pub struct SequentialStrategy;

impl ExecutionStrategy for SequentialStrategy {
    fn strategy_type(&self) -> StrategyType {
        StrategyType::Sequential
    }

    fn run(
        &self,
        config: &SimulationConfig,
        source: &mut dyn RandomSource,
        log: Arc<dyn EventLog>,
    ) -> Result<RunReport, SimulationError> {
        let generator = ProfileGenerator::new(config);
        let bank = Bank::new(config.initial_funds, Arc::clone(&log));
        let mut outcomes = Vec::with_capacity(config.num_clients as usize);

        tracing::debug!(clients = config.num_clients, "starting sequential run");

        let start = Instant::now();
        for id in 1..=config.num_clients {
            let client = Client::new(generator.draw(id, &mut *source));
            outcomes.push(client.run_blocking(&bank));
        }
        let duration = start.elapsed();

        let report = RunReport {
            label: StrategyType::Sequential.label(),
            initial_funds: config.initial_funds,
            final_balance: bank.balance(),
            duration,
            outcomes,
            journal: bank.journal(),
        };
        log.record(MAIN_LABEL, &summary_line(&report));

        Ok(report)
    }
}
