//! # Fuses
//!
//! Set-only bitmask. Bits are burned, never cleared, and the raw integer is
//! only readable.
//!
//! ```text
//! Unlocked ──burn(1|2 partial)──► PartiallyBurned ──burn(rest)──► FullyLocked
//!     └───────────────────burn(1|2)────────────────────────────────────┘
//! ```

use super::errors::FuseError;
use serde::{Deserialize, Serialize};

/// Freezes the node's royalty rate, split and share supply.
pub const CANNOT_CHANGE_ROYALTY: u32 = 1;

/// Forbids creating children under the node.
pub const PARENT_CANNOT_CONTROL: u32 = 2;

/// Both named fuses.
pub const ALL_NAMED_FUSES: u32 = CANNOT_CHANGE_ROYALTY | PARENT_CANNOT_CONTROL;

/// Derived lifecycle of a node's named fuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuseState {
    /// No named fuse burned.
    Unlocked,
    /// Exactly one named fuse burned.
    PartiallyBurned,
    /// Both named fuses burned. Terminal.
    FullyLocked,
}

/// Burned fuse bits of one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fuses(u32);

impl Fuses {
    /// No fuse burned.
    pub const NONE: Self = Self(0);

    /// Burns `mask`. Returns the bits that were newly burned.
    ///
    /// Bits already burned in a partially overlapping mask are left as is.
    pub fn burn(&mut self, mask: u32) -> Result<u32, FuseError> {
        if mask == 0 {
            return Err(FuseError::EmptyFuseMask);
        }
        if self.0 & mask == mask {
            return Err(FuseError::FuseAlreadyBurned(mask));
        }
        let newly = mask & !self.0;
        self.0 |= mask;
        Ok(newly)
    }

    /// True if every bit of `mask` is burned. An empty mask is never burned.
    #[must_use]
    pub const fn is_burned(&self, mask: u32) -> bool {
        mask != 0 && self.0 & mask == mask
    }

    /// True once any named fuse is burned.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.0 & ALL_NAMED_FUSES != 0
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Lattice position of the named fuses.
    #[must_use]
    pub const fn state(&self) -> FuseState {
        match (self.0 & ALL_NAMED_FUSES).count_ones() {
            0 => FuseState::Unlocked,
            1 => FuseState::PartiallyBurned,
            _ => FuseState::FullyLocked,
        }
    }
}
