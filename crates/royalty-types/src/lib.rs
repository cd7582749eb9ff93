//! # Royalty Types Crate
//!
//! Identifiers and primitives shared by the royalty subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every subsystem keys its tables by [`Node`]
//!   and [`Address`] from this crate.
//! - **Content-derived nodes**: child nodes are ENS namehash steps of their
//!   parent, see [`Node::child`].
//! - **Explicit authority**: privileged calls carry a [`Caller`] role.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod errors;
pub mod namehash;
pub mod security;

pub use entities::*;
pub use errors::*;
pub use namehash::{labelhash, namehash};
pub use security::*;
