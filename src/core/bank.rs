//! The shared bank ledger
//!
//! This module provides the `Bank` struct: one balance and one journal behind
//! a single mutex. It is the only state shared between clients.
//!
//! # Thread Safety
//!
//! Each operation takes the lock once, performs its whole
//! read-check-write sequence and appends its journal entry before releasing
//! it. No other operation can observe the balance between the check and the
//! debit of a loan request. Log lines are emitted while the lock is held, so
//! their order matches the journal.

use super::traits::EventLog;
use crate::types::{Amount, ClientId, ClientLabel, EntryKind, LedgerEntry};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// State guarded by the bank's lock
#[derive(Debug)]
struct LedgerState {
    balance: Amount,
    journal: Vec<LedgerEntry>,
}

/// Shared ledger with a mutually exclusive balance
///
/// Wrap in `Arc` to share between concurrent clients.
pub struct Bank {
    state: Mutex<LedgerState>,
    log: Arc<dyn EventLog>,
}

impl std::fmt::Debug for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bank")
            .field("balance", &self.balance())
            .finish_non_exhaustive()
    }
}

impl Bank {
    /// Create a bank holding `initial_funds`
    ///
    /// # Arguments
    ///
    /// * `initial_funds` - Starting balance
    /// * `log` - Sink for the per-operation log lines
    pub fn new(initial_funds: Amount, log: Arc<dyn EventLog>) -> Self {
        Self {
            state: Mutex::new(LedgerState {
                balance: initial_funds,
                journal: Vec::new(),
            }),
            log,
        }
    }

    // Every critical section writes the balance in a single assignment, so a
    // poisoned lock still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request a loan of `amount` for `client`
    ///
    /// Approves and debits when `amount <= balance`; the boundary is
    /// inclusive, so a request for the whole balance succeeds and leaves zero.
    /// Otherwise the balance is left untouched.
    ///
    /// # Returns
    ///
    /// `true` if the loan was approved, `false` if funds were insufficient
    pub fn request_loan(&self, client: ClientId, amount: Amount) -> bool {
        let label = ClientLabel(client).to_string();
        let mut state = self.lock();
        let before = state.balance;

        if amount <= before {
            self.log.record(
                &label,
                &format!(
                    "Approved loan of ${} for {}. Funds before: ${}",
                    amount, label, before
                ),
            );
            state.balance = before - amount;
            let after = state.balance;
            state.journal.push(LedgerEntry {
                client,
                kind: EntryKind::LoanApproved,
                amount,
                balance_before: before,
                balance_after: after,
            });
            self.log
                .record(&label, &format!("Remaining funds: ${}", after));
            true
        } else {
            self.log.record(
                &label,
                &format!(
                    "Rejected loan of ${} for {}. Insufficient funds (${}).",
                    amount, label, before
                ),
            );
            state.journal.push(LedgerEntry {
                client,
                kind: EntryKind::LoanRejected,
                amount,
                balance_before: before,
                balance_after: before,
            });
            false
        }
    }

    /// Credit a repayment of `amount` from `client`
    ///
    /// Payments always succeed.
    pub fn receive_payment(&self, client: ClientId, amount: Amount) {
        let label = ClientLabel(client).to_string();
        let mut state = self.lock();
        let before = state.balance;

        self.log.record(
            &label,
            &format!("{} pays ${}. Funds before: ${}", label, amount, before),
        );
        state.balance = before + amount;
        let after = state.balance;
        state.journal.push(LedgerEntry {
            client,
            kind: EntryKind::Payment,
            amount,
            balance_before: before,
            balance_after: after,
        });
        self.log.record(&label, &format!("Funds now: ${}", after));
    }

    /// Current balance
    pub fn balance(&self) -> Amount {
        self.lock().balance
    }

    /// Snapshot of the journal in lock-acquisition order
    pub fn journal(&self) -> Vec<LedgerEntry> {
        self.lock().journal.clone()
    }
}
