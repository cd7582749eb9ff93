//! # Orchestrator Entities
//!
//! - [`CreateConfigRequest`]: input of `create_config`
//! - [`NodeState`]: everything the service stores for one node
//! - [`RoyaltyConfigView`]: read-only snapshot returned by `get_config`

use er_01_share_ledger::ShareBook;
use er_02_payment_splitter::{ParentRoyalty, SplitAccount};
use er_03_fuse_registry::{FuseState, Fuses};
use royalty_types::{Address, Node, U256};
use serde::{Deserialize, Serialize};

/// Request to create a child node with its royalty configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConfigRequest {
    /// Parent node.
    pub parent: Node,
    /// Child label, hashed as given.
    pub label: String,
    /// Owner of the new node and recipient of its royalty.
    pub owner: Address,
    /// Royalty rate charged to the new node's own children, in bps.
    pub royalty_bps: u16,
    /// Share units minted to the owner. Defaults to `royalty_bps`.
    #[serde(default)]
    pub share_units: Option<U256>,
    /// Beneficiaries of the node's split. May be empty.
    #[serde(default)]
    pub beneficiaries: Vec<Address>,
    /// Shares in bps, parallel to `beneficiaries`.
    #[serde(default)]
    pub shares: Vec<u16>,
}

impl CreateConfigRequest {
    /// Request without a split.
    pub fn new(parent: Node, label: impl Into<String>, owner: Address, royalty_bps: u16) -> Self {
        Self {
            parent,
            label: label.into(),
            owner,
            royalty_bps,
            share_units: None,
            beneficiaries: Vec::new(),
            shares: Vec::new(),
        }
    }

    /// Sets the split.
    #[must_use]
    pub fn with_split(mut self, beneficiaries: Vec<Address>, shares: Vec<u16>) -> Self {
        self.beneficiaries = beneficiaries;
        self.shares = shares;
        self
    }

    /// Overrides the minted share units.
    #[must_use]
    pub fn with_share_units(mut self, units: U256) -> Self {
        self.share_units = Some(units);
        self
    }

    /// Node this request creates.
    #[must_use]
    pub fn node(&self) -> Node {
        self.parent.child(&self.label)
    }
}

/// How a node came into existence through `create_config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOrigin {
    /// Parent node.
    pub parent: Node,
    /// Label under the parent.
    pub label: String,
    /// Node owner.
    pub owner: Address,
    /// Created through `create_locked_config`.
    pub created_locked: bool,
}

/// Complete per-node state. Mutated only on a staged copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeState {
    /// Share ledger.
    pub shares: ShareBook,
    /// Payment splitter.
    pub splits: SplitAccount,
    /// Fuse bits.
    pub fuses: Fuses,
    /// Set by `create_config`.
    pub origin: Option<NodeOrigin>,
}

impl NodeState {
    /// True if nothing was ever recorded for the node.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.origin.is_none()
            && !self.shares.has_supply()
            && !self.shares.is_locked()
            && self.shares.royalty().is_none()
            && self.splits.config().is_none()
            && self.splits.parent_royalty().is_none()
            && self.splits.total_deposited().is_zero()
            && self.fuses.bits() == 0
    }

    /// Owner recorded at creation.
    #[must_use]
    pub fn owner(&self) -> Option<Address> {
        self.origin.as_ref().map(|o| o.owner)
    }
}

/// Read-only snapshot of a node's configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoyaltyConfigView {
    /// Node.
    pub node: Node,
    /// Owner, if created through the orchestrator.
    pub owner: Option<Address>,
    /// Parent, if created through the orchestrator.
    pub parent: Option<Node>,
    /// Label, if created through the orchestrator.
    pub label: Option<String>,
    /// Split beneficiaries (empty if none).
    pub beneficiaries: Vec<Address>,
    /// Split shares in bps.
    pub shares: Vec<u16>,
    /// Rate charged to children, in bps.
    pub royalty_rate: u16,
    /// Recipient of children's royalty.
    pub royalty_recipient: Option<Address>,
    /// Raw fuse bits.
    pub fuses: u32,
    /// Fuse lattice position.
    pub fuse_state: FuseState,
    /// Units minted.
    pub total_supply: U256,
    /// Supply lock flag.
    pub supply_locked: bool,
    /// Any named fuse burned.
    pub locked: bool,
    /// Share units were ever minted.
    pub has_royalty: bool,
    /// Supply frozen by the lock, zero while unlocked.
    pub locked_amount: U256,
    /// Parent royalty association.
    pub parent_royalty: Option<ParentRoyalty>,
    /// Lifetime deposits.
    pub total_deposited: U256,
    /// Lifetime claims.
    pub total_released: U256,
}

impl RoyaltyConfigView {
    /// Builds a snapshot of `state`.
    #[must_use]
    pub fn from_state(node: Node, state: &NodeState) -> Self {
        let (beneficiaries, shares) = state
            .splits
            .config()
            .map(|c| (c.beneficiaries().to_vec(), c.shares().to_vec()))
            .unwrap_or_default();
        let royalty = state.shares.royalty().unwrap_or_default();
        let supply = state.shares.supply();

        Self {
            node,
            owner: state.owner(),
            parent: state.origin.as_ref().map(|o| o.parent),
            label: state.origin.as_ref().map(|o| o.label.clone()),
            beneficiaries,
            shares,
            royalty_rate: royalty.rate,
            royalty_recipient: royalty.recipient,
            fuses: state.fuses.bits(),
            fuse_state: state.fuses.state(),
            total_supply: supply.amount,
            supply_locked: supply.locked,
            locked: state.fuses.is_locked(),
            has_royalty: state.shares.has_supply(),
            locked_amount: if supply.locked {
                supply.amount
            } else {
                U256::zero()
            },
            parent_royalty: state.splits.parent_royalty().copied(),
            total_deposited: state.splits.total_deposited(),
            total_released: state.splits.total_released(),
        }
    }
}
