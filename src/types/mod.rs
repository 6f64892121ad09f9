//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `amount`: Currency amounts and the repayment rule
//! - `client`: Client identifiers, profiles and outcomes
//! - `config`: Simulation configuration
//! - `error`: Error types for the simulation
//! - `ledger`: Journal entries written by the bank
//! - `report`: Per-run reports

pub mod amount;
pub mod client;
pub mod config;
pub mod error;
pub mod ledger;
pub mod report;

pub use amount::{repayment_for, Amount, INTEREST_RATE};
pub use client::{ClientId, ClientLabel, ClientOutcome, ClientProfile};
pub use config::SimulationConfig;
pub use error::SimulationError;
pub use ledger::{EntryKind, LedgerEntry};
pub use report::RunReport;
