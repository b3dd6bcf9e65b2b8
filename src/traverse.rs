//! Read-only traversal for diagnostics and display
//!
//! The display contract: roots in ascending `(degree, key)` order, then each
//! root's subtree in breadth-first order. Pure readers; the core operations
//! never depend on these.

use std::collections::VecDeque;

use crate::arena::EntryId;
use crate::heap::FibonacciHeap;

impl FibonacciHeap {
    /// Root entries ordered by ascending `(degree, key)`.
    pub fn roots(&self) -> Vec<EntryId> {
        let mut roots: Vec<EntryId> = match self.min {
            Some(min) => self.arena.ring_members(min).into_vec(),
            None => Vec::new(),
        };
        roots.sort_by_key(|&id| (self.arena[id].degree, self.arena[id].key));
        roots
    }

    /// Direct children of a live entry, in ring order. Empty for leaves and
    /// stale handles.
    pub fn children(&self, id: EntryId) -> Vec<EntryId> {
        match self.arena.get(id).and_then(|node| node.child) {
            Some(child) => self.arena.ring_members(child).into_vec(),
            None => Vec::new(),
        }
    }

    /// Keys of `root`'s subtree in breadth-first order, siblings in ring
    /// order. Empty if `root` is stale.
    pub fn level_order(&self, root: EntryId) -> Vec<i32> {
        if !self.arena.contains(root) {
            return Vec::new();
        }

        let mut keys = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(id) = queue.pop_front() {
            keys.push(self.arena[id].key);
            if let Some(child) = self.arena[id].child {
                queue.extend(self.arena.ring_members(child));
            }
        }
        keys
    }
}
