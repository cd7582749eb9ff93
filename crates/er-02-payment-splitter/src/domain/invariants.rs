//! # Domain Invariants
//!
//! Conservation checks for [`SplitAccount`] snapshots.

use super::entities::{Distribution, SplitAccount};
use royalty_types::U256;

/// `sum(pending) == total_deposited - total_released`.
#[must_use]
pub fn invariant_pending_conservation(account: &SplitAccount) -> bool {
    let Some(outstanding) = account
        .total_deposited()
        .checked_sub(account.total_released())
    else {
        return false;
    };
    let mut sum = U256::zero();
    for (_, value) in account.pending_balances() {
        match sum.checked_add(*value) {
            Some(next) => sum = next,
            None => return false,
        }
    }
    sum == outstanding
}

/// Credits of a single deposit add up to the deposited amount.
#[must_use]
pub fn invariant_distribution_exact(distribution: &Distribution) -> bool {
    distribution.total_credited() == distribution.amount
}
