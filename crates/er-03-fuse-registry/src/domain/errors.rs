//! Fuse registry errors.

use thiserror::Error;

/// Fuse registry error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FuseError {
    /// Every requested bit is already burned.
    #[error("Fuse already burned: {0:#x}")]
    FuseAlreadyBurned(u32),

    /// Burn request with no bits set.
    #[error("Empty fuse mask")]
    EmptyFuseMask,
}
