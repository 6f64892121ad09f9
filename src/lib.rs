//! Bank Loan Simulator Library
//! # Overview
//!
//! This library simulates many clients borrowing from and repaying one shared
//! bank ledger, and runs the same workload both concurrently and strictly
//! sequentially to compare throughput and final balances.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (amounts, client profiles, configuration, reports)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Simulation components:
//!   - [`core::bank`] - The shared ledger guarded by a single mutex
//!   - [`core::client`] - The per-client loan workflow state machine
//!   - [`core::generator`] - Drawing client profiles from a random source
//! - [`strategy`] - Concurrent and sequential execution, plus the comparison
//! - [`io`] - Event logging and report output
//!
//! # Client Workflow
//!
//! Each client:
//!
//! - **Requests** a loan; the bank approves it only if the amount does not
//!   exceed the current balance
//! - **Waits** a randomized delay if approved, without holding the bank lock
//! - **Repays** the loan plus 5% interest, truncated to whole units
//!
//! # Invariants
//!
//! For every run:
//! - The balance is never negative
//! - `final = initial - approved loans + repayments`, exactly

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{Bank, Client, EventLog, RandomSource};
pub use strategy::{create_strategy, ExecutionStrategy, StrategyType};
pub use types::{
    Amount, ClientId, ClientOutcome, ClientProfile, RunReport, SimulationConfig, SimulationError,
};
