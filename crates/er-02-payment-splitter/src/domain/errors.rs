//! # Domain Errors
//!
//! Error types for the Payment Splitter.

use royalty_types::Address;
use thiserror::Error;

/// Payment splitter error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitterError {
    /// Beneficiary and share lists differ in length.
    #[error("Length mismatch: {beneficiaries} beneficiaries, {shares} shares")]
    LengthMismatch {
        /// Number of beneficiaries supplied.
        beneficiaries: usize,
        /// Number of shares supplied.
        shares: usize,
    },

    /// The same address appears twice.
    #[error("Duplicate beneficiary: {0}")]
    DuplicateBeneficiary(Address),

    /// Shares do not sum to 10,000 bps (also raised for an empty list).
    #[error("Invalid share sum: {0} bps (expected 10000)")]
    InvalidShareSum(u32),

    /// A beneficiary or recipient is the zero address.
    #[error("Zero address not allowed")]
    ZeroAddress,

    /// More beneficiaries than the engine allows.
    #[error("Too many beneficiaries: {count} (max {max})")]
    TooManyBeneficiaries {
        /// Number supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Parent royalty rate above 10,000 bps.
    #[error("Invalid parent royalty rate: {0} bps")]
    InvalidRoyaltyRate(u16),

    /// Split cannot be replaced after the first deposit.
    #[error("Split already active: deposits have been received")]
    SplitAlreadyActive,

    /// Parent royalty is a one-time association.
    #[error("Parent royalty already set")]
    ParentRoyaltyAlreadySet,

    /// Deposit to a node with no split.
    #[error("No split configured")]
    NoSplitConfigured,

    /// Deposit of zero.
    #[error("Deposit amount must be non-zero")]
    ZeroDeposit,

    /// Intermediate product exceeds U256.
    #[error("Arithmetic overflow in distribution")]
    Overflow,

    /// Claim with a zero pending balance.
    #[error("Nothing to claim for {0}")]
    NothingToClaim(Address),
}
