//! Ledger journal types
//!
//! Every bank operation appends one `LedgerEntry`, written in the same
//! critical section as the balance change it describes.

use super::amount::Amount;
use super::client::ClientId;

/// Kind of bank operation recorded in the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A loan was approved and debited
    LoanApproved,

    /// A loan was rejected for insufficient funds; balance unchanged
    LoanRejected,

    /// A repayment was credited
    Payment,
}

/// One journal line
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Client that issued the operation
    pub client: ClientId,

    /// What happened
    pub kind: EntryKind,

    /// Amount requested or paid
    pub amount: Amount,

    /// Balance observed when the lock was taken
    pub balance_before: Amount,

    /// Balance left when the lock was released
    pub balance_after: Amount,
}
