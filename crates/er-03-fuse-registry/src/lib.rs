//! # Fuse Registry Subsystem
//!
//! One-way immutability bits per node.
//!
//! | Bit | Name | Effect |
//! |-----|------|--------|
//! | `1` | `CANNOT_CHANGE_ROYALTY` | royalty rate, split and share supply frozen |
//! | `2` | `PARENT_CANNOT_CONTROL` | no new children under the node |
//!
//! A node is *locked* once any named bit is burned.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
