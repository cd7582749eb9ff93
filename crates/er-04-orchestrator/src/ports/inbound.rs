//! # Inbound Ports
//!
//! Node creation and configuration queries. The subsystem APIs
//! (`ShareLedgerApi`, `PaymentSplitterApi`, `FuseRegistryApi`) are defined in
//! their own crates and implemented by the same service.

use crate::domain::{CreateConfigRequest, RoyaltyConfigView};
use royalty_types::Node;

/// Royalty orchestration API.
pub trait RoyaltyApi: Send + Sync {
    /// Error type returned by creation.
    type Error: std::error::Error;

    /// Create a node with its royalty, shares, split and parent link.
    /// All-or-nothing.
    fn create_config(&self, request: CreateConfigRequest) -> Result<Node, Self::Error>;

    /// As [`Self::create_config`], then burn both named fuses and lock the
    /// supply in the same transaction.
    fn create_locked_config(&self, request: CreateConfigRequest) -> Result<Node, Self::Error>;

    /// Snapshot of a node's configuration. `None` if the node has no state.
    fn get_config(&self, node: Node) -> Option<RoyaltyConfigView>;
}
