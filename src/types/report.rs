//! Run reports
//!
//! A `RunReport` is what a strategy hands back after every client has
//! finished: the final balance, the elapsed time and enough detail to check
//! the conservation invariant.

use super::amount::Amount;
use super::client::ClientOutcome;
use super::ledger::{EntryKind, LedgerEntry};
use std::time::Duration;

/// Result of one simulation run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Name of the strategy that produced the report ("Concurrent" or "Sequential")
    pub label: &'static str,

    /// Balance the bank started with
    pub initial_funds: Amount,

    /// Balance after every client finished
    pub final_balance: Amount,

    /// Wall-clock time from launching the first client to the last one finishing
    pub duration: Duration,

    /// Per-client outcomes, ordered by client ID
    pub outcomes: Vec<ClientOutcome>,

    /// Bank operations in lock-acquisition order
    pub journal: Vec<LedgerEntry>,
}

impl RunReport {
    /// Sum of all approved loans
    pub fn total_borrowed(&self) -> Amount {
        self.outcomes.iter().map(ClientOutcome::borrowed).sum()
    }

    /// Sum of all repayments made by approved clients
    pub fn total_repaid(&self) -> Amount {
        self.outcomes.iter().map(ClientOutcome::repaid).sum()
    }

    /// Number of approved loans
    pub fn approved_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.approved).count()
    }

    /// Number of rejected loans
    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.approved_count()
    }

    /// Balance implied by the outcomes: initial - borrowed + repaid
    pub fn expected_balance(&self) -> Amount {
        self.initial_funds - self.total_borrowed() + self.total_repaid()
    }

    /// Whether the final balance matches the outcomes exactly
    pub fn is_conserved(&self) -> bool {
        self.final_balance == self.expected_balance()
    }

    /// Whether no journal entry ever left the balance negative
    pub fn never_negative(&self) -> bool {
        self.final_balance >= Amount::ZERO
            && self
                .journal
                .iter()
                .all(|entry| entry.balance_before >= Amount::ZERO && entry.balance_after >= Amount::ZERO)
    }

    /// Approve/reject decisions in the order the bank took them
    pub fn decisions(&self) -> Vec<(u32, bool)> {
        self.journal
            .iter()
            .filter_map(|entry| match entry.kind {
                EntryKind::LoanApproved => Some((entry.client, true)),
                EntryKind::LoanRejected => Some((entry.client, false)),
                EntryKind::Payment => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientProfile;

    fn outcome(id: u32, loan: i64, approved: bool) -> ClientOutcome {
        ClientOutcome {
            profile: ClientProfile::new(id, Amount::from(loan), Duration::ZERO),
            approved,
        }
    }

    fn entry(client: u32, kind: EntryKind, before: i64, after: i64) -> LedgerEntry {
        LedgerEntry {
            client,
            kind,
            amount: Amount::from((before - after).abs()),
            balance_before: Amount::from(before),
            balance_after: Amount::from(after),
        }
    }

    fn report(final_balance: i64, outcomes: Vec<ClientOutcome>, journal: Vec<LedgerEntry>) -> RunReport {
        RunReport {
            label: "Sequential",
            initial_funds: Amount::from(20_000),
            final_balance: Amount::from(final_balance),
            duration: Duration::ZERO,
            outcomes,
            journal,
        }
    }

    #[test]
    fn test_totals_and_counts() {
        let r = report(
            20_500,
            vec![outcome(1, 10_000, true), outcome(2, 30_000, false)],
            vec![],
        );
        assert_eq!(r.total_borrowed(), Amount::from(10_000));
        assert_eq!(r.total_repaid(), Amount::from(10_500));
        assert_eq!(r.approved_count(), 1);
        assert_eq!(r.rejected_count(), 1);
        assert_eq!(r.expected_balance(), Amount::from(20_500));
        assert!(r.is_conserved());
    }

    #[test]
    fn test_conservation_detects_lost_update() {
        let r = report(10_000, vec![outcome(1, 10_000, true)], vec![]);
        assert!(!r.is_conserved());
    }

    #[test]
    fn test_decisions_skip_payments() {
        let r = report(
            20_500,
            vec![],
            vec![
                entry(1, EntryKind::LoanApproved, 20_000, 10_000),
                entry(2, EntryKind::LoanRejected, 10_000, 10_000),
                entry(1, EntryKind::Payment, 10_000, 20_500),
            ],
        );
        assert_eq!(r.decisions(), vec![(1, true), (2, false)]);
        assert!(r.never_negative());
    }

    #[test]
    fn test_never_negative_flags_bad_entry() {
        let r = report(0, vec![], vec![entry(1, EntryKind::LoanApproved, 100, -50)]);
        assert!(!r.never_negative());
    }
}
