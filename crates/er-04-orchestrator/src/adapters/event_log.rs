//! In-Memory Event Log
//!
//! Implements the `EventSink` port by appending to a vector.

use crate::events::{EventRecord, RoyaltyEvent};
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use royalty_types::Node;
use tracing::debug;

/// Append-only in-memory event log.
#[derive(Default)]
pub struct InMemoryEventLog {
    records: RwLock<Vec<EventRecord>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in publication order.
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.read().clone()
    }

    /// All events in publication order.
    pub fn events(&self) -> Vec<RoyaltyEvent> {
        self.records.read().iter().map(|r| r.event.clone()).collect()
    }

    /// Events of one node.
    pub fn events_for(&self, node: Node) -> Vec<RoyaltyEvent> {
        self.records
            .read()
            .iter()
            .filter(|r| r.event.node() == node)
            .map(|r| r.event.clone())
            .collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True if nothing was published.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl EventSink for InMemoryEventLog {
    fn publish(&self, record: EventRecord) {
        debug!(
            "[er-04] Event #{} {} on {}",
            record.sequence,
            record.event.name(),
            record.event.node()
        );
        self.records.write().push(record);
    }
}
