//! # Node Derivation
//!
//! ENS-style namehash:
//!
//! ```text
//! labelhash(label) = keccak256(label)
//! child(parent, l) = keccak256(parent ‖ labelhash(l))
//! namehash("")     = 0x00..00
//! namehash("a.b")  = child(namehash("b"), "a")
//! ```
//!
//! Labels are hashed as given. Normalization is the caller's job.

use crate::entities::Node;
use sha3::{Digest, Keccak256};

/// Keccak-256 of a label.
#[must_use]
pub fn labelhash(label: &str) -> [u8; 32] {
    let digest = Keccak256::digest(label.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Namehash of a dotted name, e.g. `"parent.eth"`.
#[must_use]
pub fn namehash(name: &str) -> Node {
    if name.is_empty() {
        return Node::ZERO;
    }
    name.rsplit('.').fold(Node::ZERO, |node, label| node.child(label))
}

impl Node {
    /// Derives the child node for `label` under this node.
    #[must_use]
    pub fn child(&self, label: &str) -> Node {
        let mut hasher = Keccak256::new();
        hasher.update(self.as_bytes());
        hasher.update(labelhash(label));
        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        Node::new(out)
    }
}
