//! Simulation configuration
//!
//! Holds the parameters shared by both execution strategies. The defaults
//! match the stock simulation: 100000 in initial funds, 10 clients, loans
//! between 5000 and 20000 and delays between 0.5 and 2.0 seconds.

use super::amount::{repayment_for, Amount};
use super::error::SimulationError;
use std::time::Duration;

/// Default starting balance of the bank
pub const DEFAULT_INITIAL_FUNDS: u64 = 100_000;

/// Default number of clients per run
pub const DEFAULT_NUM_CLIENTS: u32 = 10;

/// Default loan range (inclusive, whole currency units)
pub const DEFAULT_LOAN_RANGE: (u64, u64) = (5_000, 20_000);

/// Default delay range in milliseconds (half-open)
pub const DEFAULT_DELAY_RANGE_MS: (u64, u64) = (500, 2_000);

/// Configuration of one simulation run
///
/// The same configuration is handed to both strategies. Each strategy builds
/// its own bank and its own random source from it, so runs never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Starting balance of the bank
    pub initial_funds: Amount,

    /// Number of clients per run
    pub num_clients: u32,

    /// Smallest loan a client may request
    pub loan_min: u64,

    /// Largest loan a client may request
    pub loan_max: u64,

    /// Lower bound of the client delay (inclusive)
    pub delay_min: Duration,

    /// Upper bound of the client delay (exclusive unless equal to `delay_min`)
    pub delay_max: Duration,

    /// Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_funds: Amount::from(DEFAULT_INITIAL_FUNDS),
            num_clients: DEFAULT_NUM_CLIENTS,
            loan_min: DEFAULT_LOAN_RANGE.0,
            loan_max: DEFAULT_LOAN_RANGE.1,
            delay_min: Duration::from_millis(DEFAULT_DELAY_RANGE_MS.0),
            delay_max: Duration::from_millis(DEFAULT_DELAY_RANGE_MS.1),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with custom funds and client count
    ///
    /// Loan and delay ranges keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `initial_funds` is not positive,
    /// `num_clients` is zero, or the funds leave no room for every client
    /// repaying the largest possible loan.
    pub fn new(initial_funds: Amount, num_clients: u32) -> Result<Self, SimulationError> {
        if initial_funds <= Amount::ZERO {
            return Err(SimulationError::invalid_config(
                "initial_funds",
                format!("must be positive, got {}", initial_funds),
            ));
        }
        if num_clients == 0 {
            return Err(SimulationError::invalid_config(
                "num_clients",
                "must be at least 1",
            ));
        }

        let config = Self {
            initial_funds,
            num_clients,
            ..Self::default()
        };
        config.check_headroom("initial_funds")?;
        Ok(config)
    }

    /// Largest balance the bank can ever reach
    ///
    /// Bounded by the initial funds plus every client repaying the largest
    /// loan. `None` if that bound does not fit in an `Amount`.
    pub fn max_balance(&self) -> Option<Amount> {
        repayment_for(Amount::from(self.loan_max))
            .checked_mul(Amount::from(self.num_clients))
            .and_then(|inflow| self.initial_funds.checked_add(inflow))
    }

    // The largest reachable balance must fit in an Amount
    fn check_headroom(&self, field: &str) -> Result<(), SimulationError> {
        match self.max_balance() {
            Some(_) => Ok(()),
            None => Err(SimulationError::invalid_config(
                field,
                format!(
                    "{} clients repaying up to {} each would overflow funds of {}",
                    self.num_clients,
                    repayment_for(Amount::from(self.loan_max)),
                    self.initial_funds
                ),
            )),
        }
    }

    /// Replace the loan range
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `min` is zero or greater than `max`, or if
    /// repayments of `max` could overflow the balance.
    pub fn with_loan_range(mut self, min: u64, max: u64) -> Result<Self, SimulationError> {
        if min == 0 || min > max {
            return Err(SimulationError::invalid_config(
                "loan_range",
                format!("expected 0 < min <= max, got {}..={}", min, max),
            ));
        }
        self.loan_min = min;
        self.loan_max = max;
        self.check_headroom("loan_range")?;
        Ok(self)
    }

    /// Replace the delay range
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `min` is greater than `max`.
    pub fn with_delay_range(mut self, min: Duration, max: Duration) -> Result<Self, SimulationError> {
        if min > max {
            return Err(SimulationError::invalid_config(
                "delay_range",
                format!("expected min <= max, got {:?}..{:?}", min, max),
            ));
        }
        self.delay_min = min;
        self.delay_max = max;
        Ok(self)
    }

    /// Fix the random seed so runs are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
