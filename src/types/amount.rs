//! Currency amounts used by the bank ledger
//!
//! Amounts are `Decimal` values. Loans are drawn as whole currency units and
//! repayments are truncated back to whole units, so balances stay integral
//! unless the initial funds themselves carry a fractional part.

use rust_decimal::Decimal;

/// Currency amount held or moved by the bank
pub type Amount = Decimal;

/// Interest charged on every approved loan (5%)
pub const INTEREST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Compute the repayment owed for a loan
///
/// The result is `floor(loan * 1.05)`. Truncation is exact because the
/// multiplication happens in decimal arithmetic, never in floating point.
pub fn repayment_for(loan: Amount) -> Amount {
    (loan + loan * INTEREST_RATE).floor()
}
