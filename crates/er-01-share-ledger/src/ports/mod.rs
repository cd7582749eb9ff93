//! Ports for the Share Ledger.

pub mod inbound;

pub use inbound::*;
