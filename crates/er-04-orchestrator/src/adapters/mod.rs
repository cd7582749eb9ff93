//! Adapters for the orchestrator.

pub mod event_log;
pub mod node_table;

pub use event_log::InMemoryEventLog;
pub use node_table::{NodeSlot, NodeTable};
