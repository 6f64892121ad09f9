//! Client-related types for the bank simulation
//!
//! This module defines the parameters drawn for each simulated client and the
//! outcome recorded once the client has finished its loan workflow.

use super::amount::{repayment_for, Amount};
use std::fmt;
use std::time::Duration;

/// Client identifier
///
/// Unique within a single run, numbered from 1 to N.
pub type ClientId = u32;

/// Label used to tag log lines and units of work for a client
///
/// Always of the form `Client-<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientLabel(pub ClientId);

impl fmt::Display for ClientLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client-{}", self.0)
    }
}

/// Parameters of a single simulated client
///
/// Created by the strategy before the client runs. The repayment amount is
/// fixed at construction time, whether or not the loan ends up approved.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProfile {
    /// Client identifier (1..=N)
    pub id: ClientId,

    /// Amount requested from the bank
    pub loan_amount: Amount,

    /// Amount paid back if the loan is approved
    ///
    /// Always `floor(loan_amount * 1.05)`.
    pub repayment_amount: Amount,

    /// Processing time between approval and repayment
    pub delay: Duration,
}

impl ClientProfile {
    /// Create a profile, deriving the repayment from the loan amount
    pub fn new(id: ClientId, loan_amount: Amount, delay: Duration) -> Self {
        Self {
            id,
            loan_amount,
            repayment_amount: repayment_for(loan_amount),
            delay,
        }
    }

    /// Label of this client for logging
    pub fn label(&self) -> ClientLabel {
        ClientLabel(self.id)
    }
}

/// Final state of a client after its workflow completed
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOutcome {
    /// The parameters the client ran with
    pub profile: ClientProfile,

    /// Whether the bank approved the loan
    ///
    /// A rejected client never repays.
    pub approved: bool,
}

impl ClientOutcome {
    /// Amount debited from the bank by this client
    pub fn borrowed(&self) -> Amount {
        if self.approved {
            self.profile.loan_amount
        } else {
            Amount::ZERO
        }
    }

    /// Amount credited back to the bank by this client
    pub fn repaid(&self) -> Amount {
        if self.approved {
            self.profile.repayment_amount
        } else {
            Amount::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_label_format() {
        assert_eq!(ClientLabel(7).to_string(), "Client-7");
    }

    #[test]
    fn test_profile_derives_repayment() {
        let profile = ClientProfile::new(3, Decimal::from(10_000), Duration::from_millis(500));
        assert_eq!(profile.repayment_amount, Decimal::from(10_500));
        assert_eq!(profile.label(), ClientLabel(3));
    }

    #[test]
    fn test_outcome_amounts_for_rejected_client() {
        let profile = ClientProfile::new(1, Decimal::from(5_000), Duration::ZERO);
        let outcome = ClientOutcome {
            profile,
            approved: false,
        };
        assert_eq!(outcome.borrowed(), Decimal::ZERO);
        assert_eq!(outcome.repaid(), Decimal::ZERO);
    }

    #[test]
    fn test_outcome_amounts_for_approved_client() {
        let profile = ClientProfile::new(1, Decimal::from(5_000), Duration::ZERO);
        let outcome = ClientOutcome {
            profile,
            approved: true,
        };
        assert_eq!(outcome.borrowed(), Decimal::from(5_000));
        assert_eq!(outcome.repaid(), Decimal::from(5_250));
    }
}
