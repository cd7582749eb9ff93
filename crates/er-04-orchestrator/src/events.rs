//! # Lifecycle Events
//!
//! Published through the [`EventSink`](crate::ports::EventSink) port after a
//! node transaction commits. Rejected operations publish nothing.

use royalty_types::{Address, Node, U256};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A committed state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoyaltyEvent {
    /// Node created through `create_config` or `create_locked_config`.
    ConfigCreated {
        /// New node.
        node: Node,
        /// Its parent.
        parent: Node,
        /// Label under the parent.
        label: String,
        /// Owner.
        owner: Address,
        /// Royalty rate charged to its children.
        royalty_bps: u16,
        /// Created with both fuses burned.
        locked: bool,
    },
    /// Share units minted.
    RoyaltyMinted {
        /// Node.
        node: Node,
        /// Receiving holder.
        holder: Address,
        /// Units minted.
        amount: U256,
    },
    /// Supply locked.
    SupplyLocked {
        /// Node.
        node: Node,
        /// Final supply.
        total_supply: U256,
    },
    /// Royalty rate changed.
    RoyaltyRateSet {
        /// Node.
        node: Node,
        /// Rate in bps.
        rate: u16,
        /// Recipient of children's royalty.
        recipient: Option<Address>,
    },
    /// Split installed.
    SplitConfigured {
        /// Node.
        node: Node,
        /// Beneficiaries.
        beneficiaries: Vec<Address>,
        /// Shares in bps.
        shares: Vec<u16>,
    },
    /// Parent royalty linked.
    ParentRoyaltyLinked {
        /// Child node.
        node: Node,
        /// Parent node.
        parent: Node,
        /// Recipient of the parent cut.
        recipient: Address,
        /// Snapshotted rate in bps.
        rate: u16,
    },
    /// Deposit distributed.
    PaymentReceived {
        /// Node.
        node: Node,
        /// Amount deposited.
        amount: U256,
        /// Portion forwarded to the parent recipient.
        parent_amount: U256,
    },
    /// Pending balance paid out.
    PaymentReleased {
        /// Node.
        node: Node,
        /// Paid beneficiary.
        beneficiary: Address,
        /// Amount paid.
        amount: U256,
    },
    /// Fuse bits burned.
    FusesBurned {
        /// Node.
        node: Node,
        /// Requested mask.
        fuses: u32,
    },
    /// Royalty configuration frozen by `CANNOT_CHANGE_ROYALTY`.
    RoyaltyLocked {
        /// Node.
        node: Node,
        /// Supply at the time of locking.
        locked_amount: U256,
    },
}

impl RoyaltyEvent {
    /// Node the event belongs to.
    #[must_use]
    pub fn node(&self) -> Node {
        match self {
            Self::ConfigCreated { node, .. }
            | Self::RoyaltyMinted { node, .. }
            | Self::SupplyLocked { node, .. }
            | Self::RoyaltyRateSet { node, .. }
            | Self::SplitConfigured { node, .. }
            | Self::ParentRoyaltyLinked { node, .. }
            | Self::PaymentReceived { node, .. }
            | Self::PaymentReleased { node, .. }
            | Self::FusesBurned { node, .. }
            | Self::RoyaltyLocked { node, .. } => *node,
        }
    }

    /// Event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConfigCreated { .. } => "ConfigCreated",
            Self::RoyaltyMinted { .. } => "RoyaltyMinted",
            Self::SupplyLocked { .. } => "SupplyLocked",
            Self::RoyaltyRateSet { .. } => "RoyaltyRateSet",
            Self::SplitConfigured { .. } => "SplitConfigured",
            Self::ParentRoyaltyLinked { .. } => "ParentRoyaltyLinked",
            Self::PaymentReceived { .. } => "PaymentReceived",
            Self::PaymentReleased { .. } => "PaymentReleased",
            Self::FusesBurned { .. } => "FusesBurned",
            Self::RoyaltyLocked { .. } => "RoyaltyLocked",
        }
    }
}

/// An event with its position in the service-wide log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic sequence number.
    pub sequence: u64,
    /// Shared by all events of one operation.
    pub op_id: Uuid,
    /// The event.
    pub event: RoyaltyEvent,
}
