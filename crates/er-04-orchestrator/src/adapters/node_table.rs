//! Per-Node Lock Table
//!
//! Maps each node to its own lock so that operations on distinct nodes
//! proceed in parallel. The outer lock is held only long enough to find,
//! insert or retire a slot.
//!
//! A retired slot is detached from the table. Holders of a stale handle
//! must check [`NodeTable::is_current`] after locking it and look the node
//! up again if it was retired.

use parking_lot::RwLock;
use royalty_types::Node;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared handle to one node's state.
pub type NodeSlot<T> = Arc<RwLock<T>>;

/// Node-keyed table of independently locked slots.
pub struct NodeTable<T> {
    slots: RwLock<HashMap<Node, NodeSlot<T>>>,
}

impl<T: Default> NodeTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Slot of `node`, if one was ever created.
    pub fn slot(&self, node: &Node) -> Option<NodeSlot<T>> {
        self.slots.read().get(node).cloned()
    }

    /// Slot of `node`, inserting a default one if absent.
    pub fn slot_or_insert(&self, node: Node) -> NodeSlot<T> {
        if let Some(slot) = self.slot(&node) {
            return slot;
        }
        self.slots
            .write()
            .entry(node)
            .or_insert_with(|| Arc::new(RwLock::new(T::default())))
            .clone()
    }

    /// True if `slot` is still the table's slot for `node`.
    pub fn is_current(&self, node: &Node, slot: &NodeSlot<T>) -> bool {
        self.slots
            .read()
            .get(node)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
    }

    /// Detaches `slot` from the table if it is still the slot for `node`.
    /// Returns true if it was removed.
    pub fn retire(&self, node: &Node, slot: &NodeSlot<T>) -> bool {
        let mut slots = self.slots.write();
        if slots.get(node).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            slots.remove(node);
            return true;
        }
        false
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// True if no slot exists.
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl<T: Default> Default for NodeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
