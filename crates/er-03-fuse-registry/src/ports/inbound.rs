//! # Inbound Ports

use crate::domain::FuseState;
use royalty_types::{Caller, Node};

/// Fuse registry API.
///
/// `burn_fuses` requires the admin capability or the node owner.
pub trait FuseRegistryApi: Send + Sync {
    /// Error type returned by `burn_fuses`.
    type Error: std::error::Error;

    /// Burn `bits` on `node`. Returns the newly burned bits.
    fn burn_fuses(&self, caller: Caller<'_>, node: Node, bits: u32) -> Result<u32, Self::Error>;

    /// True if every bit of `bit` is burned on `node`.
    fn is_fuse_burned(&self, node: Node, bit: u32) -> bool;

    /// True once any named fuse is burned on `node`.
    fn is_royalty_locked(&self, node: Node) -> bool;

    /// Raw burned bits of `node`.
    fn fuses(&self, node: Node) -> u32;

    /// Lattice position of `node`.
    fn fuse_state(&self, node: Node) -> FuseState;
}
