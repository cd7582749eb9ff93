//! # Inbound Ports
//!
//! Share ledger API, keyed by node. Implemented by the orchestrator, which
//! owns the per-node [`ShareBook`](crate::ShareBook) instances.

use crate::domain::RoyaltyRate;
use royalty_types::{Address, Caller, Node, U256};

/// Share ledger API.
///
/// Writes take a [`Caller`]; `mint` and `lock_supply` are admin-only.
pub trait ShareLedgerApi: Send + Sync {
    /// Error type returned by write operations.
    type Error: std::error::Error;

    /// Mint `amount` units of `node` to `holder`. Returns the new total supply.
    fn mint(
        &self,
        caller: Caller<'_>,
        node: Node,
        holder: Address,
        amount: U256,
    ) -> Result<U256, Self::Error>;

    /// Lock the supply of `node`. Returns the final total.
    fn lock_supply(&self, caller: Caller<'_>, node: Node) -> Result<U256, Self::Error>;

    /// Set the royalty rate charged to children of `node`.
    fn set_royalty_rate(
        &self,
        caller: Caller<'_>,
        node: Node,
        rate: u16,
        recipient: Option<Address>,
    ) -> Result<(), Self::Error>;

    /// Share of `holder` in basis points (floored).
    fn share_of(&self, node: Node, holder: Address) -> u16;

    /// True once the supply of `node` is locked.
    fn is_supply_locked(&self, node: Node) -> bool;

    /// Units of `node` held by `holder`.
    fn balance_of(&self, node: Node, holder: Address) -> U256;

    /// Total units minted for `node`.
    fn total_supply(&self, node: Node) -> U256;

    /// Royalty rate charged to children of `node`.
    fn royalty_rate(&self, node: Node) -> Option<RoyaltyRate>;
}
