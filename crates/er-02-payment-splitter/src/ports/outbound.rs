//! # Outbound Ports
//!
//! Value transfer to beneficiaries.

use royalty_types::{Address, U256};
use thiserror::Error;

/// Transfer failure reported by a [`PayoutSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayoutError {
    /// The recipient refused the transfer.
    #[error("Transfer to {recipient} rejected: {reason}")]
    Rejected {
        /// Intended recipient.
        recipient: Address,
        /// Sink-specific reason.
        reason: String,
    },

    /// The sink is unavailable.
    #[error("Payout sink unavailable: {0}")]
    Unavailable(String),
}

/// Value transfer - outbound port.
///
/// Called without any node lock held. Implementations may call back into
/// the service.
pub trait PayoutSink: Send + Sync {
    /// Transfer `amount` to `recipient`.
    fn transfer(&self, recipient: Address, amount: U256) -> Result<(), PayoutError>;
}
