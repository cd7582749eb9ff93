//! # Inbound Ports
//!
//! Payment splitter API, keyed by node.

use crate::domain::{Distribution, ParentRoyalty, SplitConfig};
use royalty_types::{Address, Caller, Node, U256};

/// Payment splitter API.
///
/// `setup_split` and `setup_parent_royalty` require the admin capability or
/// the node owner. `deposit` and `claim` are open to anyone; `claim` always
/// pays the named beneficiary, never the caller.
pub trait PaymentSplitterApi: Send + Sync {
    /// Error type returned by write operations.
    type Error: std::error::Error;

    /// Install (or, before the first deposit, replace) the split of `node`.
    fn setup_split(
        &self,
        caller: Caller<'_>,
        node: Node,
        beneficiaries: Vec<Address>,
        shares: Vec<u16>,
    ) -> Result<(), Self::Error>;

    /// Link `node` to `parent`, crediting `recipient` with the parent's
    /// current royalty rate on every deposit.
    fn setup_parent_royalty(
        &self,
        caller: Caller<'_>,
        node: Node,
        parent: Node,
        recipient: Address,
    ) -> Result<(), Self::Error>;

    /// Distribute `amount` into pending balances.
    fn deposit(&self, node: Node, amount: U256) -> Result<Distribution, Self::Error>;

    /// Pay out the pending balance of `beneficiary`. Returns the amount paid.
    fn claim(&self, node: Node, beneficiary: Address) -> Result<U256, Self::Error>;

    /// Accrued, unclaimed amount.
    fn pending(&self, node: Node, beneficiary: Address) -> U256;

    /// Installed split.
    fn split_config(&self, node: Node) -> Option<SplitConfig>;

    /// Parent association.
    fn parent_royalty(&self, node: Node) -> Option<ParentRoyalty>;

    /// Lifetime deposits to `node`.
    fn total_deposited(&self, node: Node) -> U256;

    /// Lifetime successful claims from `node`.
    fn total_released(&self, node: Node) -> U256;
}
