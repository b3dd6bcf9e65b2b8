//! Node arena for the heap forest
//!
//! All heap nodes live in a [`slotmap::SlotMap`] and refer to each other by
//! [`EntryId`]. Slotmap keys are generational: once a node is freed, every
//! outstanding copy of its id stops resolving, so a caller holding a handle
//! past `extract_min`/`delete` gets an error instead of a dangling reference.

use std::ops::{Index, IndexMut};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an entry in a [`FibonacciHeap`](crate::FibonacciHeap).
    ///
    /// Returned by `insert` and accepted by `decrease_key`/`delete`. The
    /// handle stays valid until the entry leaves the heap; after that it is
    /// stale and operations on it return
    /// [`HeapError::InvalidHandle`](crate::HeapError::InvalidHandle).
    pub struct EntryId;
}

/// One node of the heap forest.
///
/// `left`/`right` tie the node into a circular sibling ring: the root ring
/// when `parent` is `None`, otherwise the child ring of its parent. A node
/// alone in its ring points at itself.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) degree: usize,
    pub(crate) marked: bool,
    pub(crate) parent: Option<EntryId>,
    pub(crate) child: Option<EntryId>,
    pub(crate) left: EntryId,
    pub(crate) right: EntryId,
}

/// Slotmap-backed storage for [`Node`]s.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: SlotMap<EntryId, Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    /// Allocates a fresh root node as a singleton ring.
    pub(crate) fn alloc(&mut self, key: i32) -> EntryId {
        self.slots.insert_with_key(|id| Node {
            key,
            degree: 0,
            marked: false,
            parent: None,
            child: None,
            left: id,
            right: id,
        })
    }

    /// Frees a node, invalidating every copy of its id.
    pub(crate) fn free(&mut self, id: EntryId) -> Option<Node> {
        self.slots.remove(id)
    }

    pub(crate) fn get(&self, id: EntryId) -> Option<&Node> {
        self.slots.get(id)
    }

    pub(crate) fn contains(&self, id: EntryId) -> bool {
        self.slots.contains_key(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

impl Index<EntryId> for NodeArena {
    type Output = Node;

    fn index(&self, id: EntryId) -> &Node {
        &self.slots[id]
    }
}

impl IndexMut<EntryId> for NodeArena {
    fn index_mut(&mut self, id: EntryId) -> &mut Node {
        &mut self.slots[id]
    }
}
