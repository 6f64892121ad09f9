//! Client profile generation
//!
//! Turns draws from a `RandomSource` into `ClientProfile`s: a loan uniform
//! over the configured integer range and a delay uniform over the configured
//! duration range.

use super::traits::RandomSource;
use crate::types::{Amount, ClientId, ClientProfile, SimulationConfig};
use std::time::Duration;

/// Draws client profiles from the ranges of a `SimulationConfig`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileGenerator {
    loan_min: u64,
    loan_max: u64,
    delay_min: Duration,
    delay_max: Duration,
}

impl ProfileGenerator {
    /// Create a generator for the ranges in `config`
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            loan_min: config.loan_min,
            loan_max: config.loan_max,
            delay_min: config.delay_min,
            delay_max: config.delay_max,
        }
    }

    /// Draw the profile of client `id`
    ///
    /// Consumes exactly two values from `source`: the loan first, then the delay.
    pub fn draw(&self, id: ClientId, source: &mut dyn RandomSource) -> ClientProfile {
        let loan = self.draw_loan(source);
        let delay = self.draw_delay(source);
        ClientProfile::new(id, Amount::from(loan), delay)
    }

    fn draw_loan(&self, source: &mut dyn RandomSource) -> u64 {
        // [min, max + 1) floored gives every integer in [min, max] equal weight
        let raw = source.next_in_range(self.loan_min as f64, self.loan_max as f64 + 1.0);
        (raw.floor() as u64).clamp(self.loan_min, self.loan_max)
    }

    fn draw_delay(&self, source: &mut dyn RandomSource) -> Duration {
        let secs = source.next_in_range(self.delay_min.as_secs_f64(), self.delay_max.as_secs_f64());
        Duration::from_secs_f64(secs.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{RngSource, ScriptedSource};

    #[test]
    fn test_draw_uses_scripted_values() {
        let generator = ProfileGenerator::new(&SimulationConfig::default());
        let mut source = ScriptedSource::new([12_345.9, 1.25]);

        let profile = generator.draw(4, &mut source);

        assert_eq!(profile.id, 4);
        assert_eq!(profile.loan_amount, Amount::from(12_345));
        assert_eq!(profile.repayment_amount, Amount::from(12_962));
        assert_eq!(profile.delay, Duration::from_millis(1_250));
    }

    #[test]
    fn test_draw_clamps_loan_to_max() {
        let generator = ProfileGenerator::new(&SimulationConfig::default());
        let mut source = ScriptedSource::new([20_001.0, 0.5]);

        let profile = generator.draw(1, &mut source);

        assert_eq!(profile.loan_amount, Amount::from(20_000));
    }

    #[test]
    fn test_draw_keeps_delay_below_max() {
        let generator = ProfileGenerator::new(&SimulationConfig::default());
        let mut source = ScriptedSource::new([5_000.0, 5.0]);

        let profile = generator.draw(1, &mut source);

        assert!(profile.delay < Duration::from_secs(2));
        assert!(profile.delay >= Duration::from_millis(1_999));
    }

    #[test]
    fn test_random_draws_within_default_ranges() {
        let generator = ProfileGenerator::new(&SimulationConfig::default());
        let mut source = RngSource::seeded(99);

        for id in 1..=500 {
            let profile = generator.draw(id, &mut source);
            assert!(profile.loan_amount >= Amount::from(5_000));
            assert!(profile.loan_amount <= Amount::from(20_000));
            assert!(profile.delay >= Duration::from_millis(500));
            assert!(profile.delay < Duration::from_secs(2));
        }
    }

    #[test]
    fn test_fixed_ranges() {
        let config = SimulationConfig::default()
            .with_loan_range(7_000, 7_000)
            .unwrap()
            .with_delay_range(Duration::ZERO, Duration::ZERO)
            .unwrap();
        let generator = ProfileGenerator::new(&config);
        let mut source = RngSource::seeded(1);

        let profile = generator.draw(1, &mut source);

        assert_eq!(profile.loan_amount, Amount::from(7_000));
        assert_eq!(profile.delay, Duration::ZERO);
    }
}
