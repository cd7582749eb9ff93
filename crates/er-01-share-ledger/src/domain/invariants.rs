//! # Domain Invariants
//!
//! Checks over [`ShareBook`] snapshots. Used by tests and by the
//! orchestrator's debug assertions before committing a staged state.

use super::entities::ShareBook;
use royalty_types::U256;

/// Sum of balances equals total supply.
#[must_use]
pub fn invariant_supply_conservation(book: &ShareBook) -> bool {
    let mut sum = U256::zero();
    for (_, balance) in book.holders() {
        match sum.checked_add(*balance) {
            Some(next) => sum = next,
            None => return false,
        }
    }
    sum == book.total_supply()
}

/// A locked book stays locked and its balances never change.
#[must_use]
pub fn invariant_locked_is_frozen(before: &ShareBook, after: &ShareBook) -> bool {
    if !before.is_locked() {
        return true;
    }
    after.is_locked()
        && before.supply() == after.supply()
        && before.holders().eq(after.holders())
        && before.royalty() == after.royalty()
}
