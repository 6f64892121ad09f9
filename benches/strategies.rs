//! Benchmark suite for comparing execution strategies
//!
//! Delays are zero so the numbers reflect scheduling and lock contention
//! rather than sleeping.
//!
//! ```bash
//! cargo bench
//! ```

use bank_loan_simulator::core::RngSource;
use bank_loan_simulator::io::MemoryLog;
use bank_loan_simulator::strategy::{create_strategy, StrategyType};
use bank_loan_simulator::types::{Amount, SimulationConfig};
use std::sync::Arc;
use std::time::Duration;

fn main() {
    divan::main();
}

fn config(clients: u32) -> SimulationConfig {
    SimulationConfig::new(Amount::from(1_000_000), clients)
        .expect("valid config")
        .with_delay_range(Duration::ZERO, Duration::ZERO)
        .expect("valid delay range")
}

fn run(strategy: StrategyType, clients: u32) {
    let strategy = create_strategy(strategy, None);
    let mut source = RngSource::seeded(1);
    strategy
        .run(&config(clients), &mut source, Arc::new(MemoryLog::new()))
        .expect("Run failed");
}

/// Sequential strategy with 10 clients
#[divan::bench]
fn sequential_small() {
    run(StrategyType::Sequential, 10);
}

/// Concurrent strategy with 10 clients
#[divan::bench]
fn concurrent_small() {
    run(StrategyType::Concurrent, 10);
}

/// Sequential strategy with 1,000 clients
#[divan::bench]
fn sequential_large() {
    run(StrategyType::Sequential, 1_000);
}

/// Concurrent strategy with 1,000 clients
#[divan::bench]
fn concurrent_large() {
    run(StrategyType::Concurrent, 1_000);
}
