//! # Domain Errors
//!
//! [`RoyaltyError`] wraps the subsystem errors with the node they occurred
//! on and adds the orchestration failures.

use er_01_share_ledger::LedgerError;
use er_02_payment_splitter::{PayoutError, SplitterError};
use er_03_fuse_registry::FuseError;
use royalty_types::{Address, Node, U256};
use serde::Serialize;
use thiserror::Error;

/// Error class, for callers that only need to know what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input. Retrying the same request cannot succeed.
    Validation,
    /// Conflicts with the node's current (often immutable) state.
    StateConflict,
    /// Nothing available to act on.
    Resource,
    /// Caller lacks the required role.
    Authorization,
}

/// Royalty service error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoyaltyError {
    /// Share ledger rejected the operation.
    #[error("Share ledger error on {node}: {source}")]
    Ledger {
        /// Node operated on.
        node: Node,
        /// Underlying error.
        #[source]
        source: LedgerError,
    },

    /// Payment splitter rejected the operation.
    #[error("Payment splitter error on {node}: {source}")]
    Splitter {
        /// Node operated on.
        node: Node,
        /// Underlying error.
        #[source]
        source: SplitterError,
    },

    /// Fuse registry rejected the operation.
    #[error("Fuse registry error on {node}: {source}")]
    Fuse {
        /// Node operated on.
        node: Node,
        /// Underlying error.
        #[source]
        source: FuseError,
    },

    /// Parent has `PARENT_CANNOT_CONTROL` burned.
    #[error("Parent {parent} is locked: no new children")]
    AlreadyLocked {
        /// The locked parent.
        parent: Node,
    },

    /// `CANNOT_CHANGE_ROYALTY` is burned on the node.
    #[error("Configuration of {node} is frozen")]
    ConfigFrozen {
        /// Frozen node.
        node: Node,
    },

    /// Node was already created.
    #[error("Node {node} already exists")]
    NodeAlreadyExists {
        /// Existing node.
        node: Node,
    },

    /// A node cannot be linked to itself as parent.
    #[error("Node {node} cannot be its own parent")]
    InvalidParent {
        /// Offending node.
        node: Node,
    },

    /// Caller is neither the admin nor the node owner.
    #[error("Unauthorized: {action} on {node}")]
    Unauthorized {
        /// Target node.
        node: Node,
        /// Attempted operation.
        action: &'static str,
    },

    /// Payout failed; the pending balance was restored.
    #[error("Transfer of {amount} to {beneficiary} failed on {node}: {source}")]
    TransferFailed {
        /// Node claimed from.
        node: Node,
        /// Intended recipient.
        beneficiary: Address,
        /// Amount restored to pending.
        amount: U256,
        /// Sink error.
        #[source]
        source: PayoutError,
    },

    /// Empty label in a create request.
    #[error("Label must not be empty")]
    EmptyLabel,

    /// Zero-address owner while the engine forbids it.
    #[error("Owner must not be the zero address")]
    ZeroOwner,
}

impl RoyaltyError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Ledger { source, .. } => match source {
                LedgerError::InvalidRoyaltyRate(_) | LedgerError::Overflow => {
                    ErrorKind::Validation
                }
                LedgerError::SupplyAlreadyLocked | LedgerError::RoyaltyRateFrozen => {
                    ErrorKind::StateConflict
                }
                LedgerError::CannotMintLockedSupply => ErrorKind::Resource,
            },
            Self::Splitter { source, .. } => match source {
                SplitterError::LengthMismatch { .. }
                | SplitterError::DuplicateBeneficiary(_)
                | SplitterError::InvalidShareSum(_)
                | SplitterError::ZeroAddress
                | SplitterError::TooManyBeneficiaries { .. }
                | SplitterError::InvalidRoyaltyRate(_)
                | SplitterError::ZeroDeposit
                | SplitterError::Overflow => ErrorKind::Validation,
                SplitterError::SplitAlreadyActive | SplitterError::ParentRoyaltyAlreadySet => {
                    ErrorKind::StateConflict
                }
                SplitterError::NoSplitConfigured | SplitterError::NothingToClaim(_) => {
                    ErrorKind::Resource
                }
            },
            Self::Fuse { source, .. } => match source {
                FuseError::EmptyFuseMask => ErrorKind::Validation,
                FuseError::FuseAlreadyBurned(_) => ErrorKind::StateConflict,
            },
            Self::AlreadyLocked { .. }
            | Self::ConfigFrozen { .. }
            | Self::NodeAlreadyExists { .. } => ErrorKind::StateConflict,
            Self::InvalidParent { .. } | Self::EmptyLabel | Self::ZeroOwner => {
                ErrorKind::Validation
            }
            Self::Unauthorized { .. } => ErrorKind::Authorization,
            Self::TransferFailed { .. } => ErrorKind::Resource,
        }
    }

    /// Node the error refers to, if any.
    #[must_use]
    pub fn node(&self) -> Option<Node> {
        match self {
            Self::Ledger { node, .. }
            | Self::Splitter { node, .. }
            | Self::Fuse { node, .. }
            | Self::ConfigFrozen { node }
            | Self::NodeAlreadyExists { node }
            | Self::InvalidParent { node }
            | Self::Unauthorized { node, .. }
            | Self::TransferFailed { node, .. } => Some(*node),
            Self::AlreadyLocked { parent } => Some(*parent),
            Self::EmptyLabel | Self::ZeroOwner => None,
        }
    }
}
