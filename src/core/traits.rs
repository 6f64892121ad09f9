//! Core traits for logging and randomness
//!
//! Both seams are injected into the bank and the strategies instead of being
//! read from ambient state, so tests can swap in deterministic doubles.

/// Sink for timestamped, labelled log lines
///
/// The bank calls this while holding its lock, so implementations must not
/// call back into the bank.
pub trait EventLog: Send + Sync {
    /// Record one line tagged with the label of the unit of work that produced it
    fn record(&self, label: &str, message: &str);
}

/// Source of uniformly distributed values
///
/// The only capability is drawing the next value in a half-open range.
/// Integer draws are derived from it by flooring.
pub trait RandomSource: Send {
    /// Draw a value in `[low, high)`
    ///
    /// When `high <= low` implementations return `low`.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;
}
