//! # Domain Errors
//!
//! Error types for the Share Ledger.

use thiserror::Error;

/// Share ledger error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Supply is locked; no further units may be minted.
    #[error("Cannot mint: supply is locked")]
    CannotMintLockedSupply,

    /// Supply was locked before.
    #[error("Supply already locked")]
    SupplyAlreadyLocked,

    /// Royalty rate above 10,000 bps.
    #[error("Invalid royalty rate: {0} bps exceeds 10000")]
    InvalidRoyaltyRate(u16),

    /// Royalty rate cannot change once the supply is locked.
    #[error("Royalty rate frozen: supply is locked")]
    RoyaltyRateFrozen,

    /// Total supply would exceed U256.
    #[error("Arithmetic overflow in share supply")]
    Overflow,
}

impl LedgerError {
    /// Returns true if the error reflects an immutable precondition
    /// (retrying cannot succeed).
    #[must_use]
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::SupplyAlreadyLocked | Self::RoyaltyRateFrozen)
    }
}
