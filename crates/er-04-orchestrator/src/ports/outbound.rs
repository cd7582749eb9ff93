//! # Outbound Ports

use crate::events::EventRecord;

/// Committed-event publication - outbound port.
///
/// Called while the node's lock is still held, so events of one node are
/// published in commit order. Implementations must not call back into the
/// service.
pub trait EventSink: Send + Sync {
    /// Publish a committed event.
    fn publish(&self, record: EventRecord);
}
