//! Ports for the Payment Splitter.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
