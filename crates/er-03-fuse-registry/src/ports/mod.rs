//! Ports for the Fuse Registry.

pub mod inbound;

pub use inbound::*;
