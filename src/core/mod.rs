//! Core simulation logic
//!
//! This module contains the core components:
//! - `traits` - Injected seams for logging and randomness
//! - `bank` - The shared ledger and its lock
//! - `client` - The per-client loan workflow
//! - `generator` - Drawing client profiles from a random source
//! - `random` - Random source implementations

pub mod bank;
pub mod client;
pub mod generator;
pub mod random;
pub mod traits;

pub use bank::Bank;
pub use client::{Client, ClientState, Step};
pub use generator::ProfileGenerator;
pub use random::{RngSource, ScriptedSource};
pub use traits::{EventLog, RandomSource};
