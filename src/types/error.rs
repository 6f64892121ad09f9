//! Error types for the bank simulation
//!
//! Insufficient funds is not an error: a rejected loan is a normal outcome
//! reported as `false` by the bank. The variants here cover infrastructure
//! failures only.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: Non-positive funds, zero clients, inverted ranges
//! - **Runtime Errors**: The worker runtime could not start, a client task panicked
//! - **Output Errors**: Writing the report or CSV rows failed

use thiserror::Error;

/// Main error type for the simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A configuration value is out of range
    ///
    /// This is a fatal error detected before any run starts.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig {
        /// Name of the offending setting
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The tokio runtime backing the concurrent strategy could not be built
    #[error("Failed to create runtime: {message}")]
    RuntimeBuild {
        /// Description of the failure
        message: String,
    },

    /// A client task ended without producing an outcome
    ///
    /// Happens only if the task panicked; the run is aborted since its
    /// final balance can no longer be explained.
    #[error("Task for Client-{client} failed: {message}")]
    TaskFailed {
        /// Client whose task failed
        client: u32,
        /// Description of the failure
        message: String,
    },

    /// I/O error while writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization error
    #[error("CSV error: {message}")]
    CsvError {
        /// Description of the CSV error
        message: String,
    },
}

impl From<std::io::Error> for SimulationError {
    fn from(error: std::io::Error) -> Self {
        SimulationError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SimulationError {
    fn from(error: csv::Error) -> Self {
        SimulationError::CsvError {
            message: error.to_string(),
        }
    }
}

impl SimulationError {
    /// Create an InvalidConfig error
    pub fn invalid_config(field: &str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidConfig {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a RuntimeBuild error
    pub fn runtime_build(message: impl Into<String>) -> Self {
        SimulationError::RuntimeBuild {
            message: message.into(),
        }
    }

    /// Create a TaskFailed error
    pub fn task_failed(client: u32, message: impl Into<String>) -> Self {
        SimulationError::TaskFailed {
            client,
            message: message.into(),
        }
    }
}
