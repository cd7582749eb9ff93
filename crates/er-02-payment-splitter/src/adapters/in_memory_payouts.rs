//! In-Memory Payout Adapter
//!
//! Implements the `PayoutSink` port by crediting an in-process balance map.

use crate::ports::outbound::{PayoutError, PayoutSink};
use parking_lot::RwLock;
use royalty_types::{Address, U256};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// In-memory payout sink for testing and the CLI.
///
/// Recipients can be marked as rejecting to exercise the failed-transfer
/// path.
pub struct InMemoryPayouts {
    /// Received amounts per recipient.
    balances: RwLock<BTreeMap<Address, U256>>,
    /// Recipients whose transfers fail.
    rejecting: RwLock<HashSet<Address>>,
    /// Successful transfer count.
    transfers: RwLock<u64>,
}

impl InMemoryPayouts {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(BTreeMap::new()),
            rejecting: RwLock::new(HashSet::new()),
            transfers: RwLock::new(0),
        }
    }

    /// Make every transfer to `recipient` fail.
    pub fn reject_transfers_to(&self, recipient: Address) {
        self.rejecting.write().insert(recipient);
    }

    /// Undo [`Self::reject_transfers_to`].
    pub fn accept_transfers_to(&self, recipient: Address) {
        self.rejecting.write().remove(&recipient);
    }

    /// Total received by `recipient`.
    pub fn balance_of(&self, recipient: &Address) -> U256 {
        self.balances
            .read()
            .get(recipient)
            .copied()
            .unwrap_or_default()
    }

    /// Snapshot of all received balances.
    pub fn balances(&self) -> BTreeMap<Address, U256> {
        self.balances.read().clone()
    }

    /// Number of successful transfers.
    pub fn transfer_count(&self) -> u64 {
        *self.transfers.read()
    }
}

impl Default for InMemoryPayouts {
    fn default() -> Self {
        Self::new()
    }
}

impl PayoutSink for InMemoryPayouts {
    fn transfer(&self, recipient: Address, amount: U256) -> Result<(), PayoutError> {
        if self.rejecting.read().contains(&recipient) {
            warn!("[er-02] Payout to {} rejected", recipient);
            return Err(PayoutError::Rejected {
                recipient,
                reason: "recipient rejects transfers".into(),
            });
        }

        let mut balances = self.balances.write();
        let balance = balances.entry(recipient).or_default();
        *balance = balance.saturating_add(amount);
        *self.transfers.write() += 1;

        debug!("[er-02] Paid {} to {}", amount, recipient);
        Ok(())
    }
}
