//! # Share Ledger Subsystem
//!
//! Proportional ownership units per node with a one-way supply lock.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                ShareLedgerApi                │
//! │  mint · lock_supply · set_royalty_rate       │
//! │  share_of · is_supply_locked · balance_of    │
//! └───────────────────────┬──────────────────────┘
//!                         │ per node
//!                ┌────────▼────────┐
//!                │    ShareBook    │
//!                │ balances        │
//!                │ TotalSupply     │
//!                │ RoyaltyRate     │
//!                └─────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Sum of balances equals total supply
//! - Once locked, supply, balances and royalty rate never change
//! - Royalty rate is at most 10,000 bps

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
