//! # Payment Splitter Subsystem
//!
//! Distributes deposits among a node's beneficiaries, after forwarding the
//! parent node's royalty cut, and pays out accrued balances on claim.
//!
//! ## Architecture
//!
//! ```text
//!            deposit(node, amount)
//!                     │
//!        ┌────────────▼────────────┐
//!        │ ParentRoyalty? cut rate │──► pending[parent recipient]
//!        └────────────┬────────────┘
//!                     │ remainder
//!        ┌────────────▼────────────┐
//!        │ SplitConfig (bps)       │──► pending[beneficiary_i]
//!        │ last takes the dust     │
//!        └─────────────────────────┘
//!
//!            claim(node, beneficiary)
//!   zero + commit ──► PayoutSink::transfer ──► (restore on failure)
//! ```
//!
//! ## Invariants
//!
//! - Credits of a deposit sum to the deposited amount
//! - `sum(pending) == total_deposited - total_released`
//! - A split cannot be replaced once a deposit was received
//! - A parent royalty is linked at most once

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;

pub use adapters::InMemoryPayouts;
pub use algorithms::{apply_bps, compute_distribution};
pub use domain::*;
pub use ports::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
