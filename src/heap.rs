//! Fibonacci heap core operations
//!
//! The heap is a collection of heap-ordered trees. Roots are linked in a
//! circular doubly linked list and the heap keeps a pointer to the minimum
//! root. Structural repair happens lazily: `extract_min` consolidates the
//! root ring down to at most one tree per degree, and `decrease_key` cuts
//! heap-order violators to the root ring, cascading through marked
//! ancestors to keep tree degrees bounded.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::arena::{EntryId, NodeArena};
use crate::error::HeapError;
use crate::ring::RingBuf;

/// Fibonacci heap over `i32` keys.
///
/// # Example
///
/// ```rust
/// use fibheap::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(5);
/// heap.decrease_key(handle, 1).unwrap();
/// assert_eq!(heap.find_min().map(|(_, k)| k), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct FibonacciHeap {
    pub(crate) arena: NodeArena,
    pub(crate) min: Option<EntryId>,
    len: usize,
}

impl FibonacciHeap {
    /// Creates a new empty heap.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            min: None,
            len: 0,
        }
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if `id` still refers to a live entry of this heap.
    pub fn contains(&self, id: EntryId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the current key of a live entry.
    pub fn key(&self, id: EntryId) -> Option<i32> {
        self.arena.get(id).map(|node| node.key)
    }

    /// Returns the number of direct children of a live entry.
    pub fn degree(&self, id: EntryId) -> Option<usize> {
        self.arena.get(id).map(|node| node.degree)
    }

    /// Returns the parent of a live entry, or `None` if the entry is a root
    /// (or stale).
    pub fn parent(&self, id: EntryId) -> Option<EntryId> {
        self.arena.get(id).and_then(|node| node.parent)
    }

    /// Returns whether a live entry has lost a child since it last became a
    /// child itself. Always `false` for roots.
    pub fn is_marked(&self, id: EntryId) -> Option<bool> {
        self.arena.get(id).map(|node| node.marked)
    }

    /// Inserts a new entry, returning its handle.
    ///
    /// The key need not be unique; duplicate keys are ordered arbitrarily
    /// relative to each other. O(1).
    pub fn insert(&mut self, key: i32) -> EntryId {
        let id = self.arena.alloc(key);
        match self.min {
            Some(min) => {
                self.arena.splice_before(min, id);
                if key < self.arena[min].key {
                    self.min = Some(id);
                }
            }
            None => self.min = Some(id),
        }
        self.len += 1;
        id
    }

    /// Returns the minimum entry and its key without removing it. O(1).
    pub fn find_min(&self) -> Option<(EntryId, i32)> {
        self.min.map(|id| (id, self.arena[id].key))
    }

    /// Removes the minimum entry and returns its key.
    ///
    /// Returns `None` on an empty heap. The entry's handle goes stale.
    /// O(log n) amortized.
    pub fn extract_min(&mut self) -> Option<i32> {
        let min = self.min?;

        // Promote the minimum's children to roots. The child ring has to be
        // snapshotted first: splicing members into the root ring relinks it.
        if let Some(child) = self.arena[min].child {
            for id in self.arena.ring_members(child) {
                self.arena.unlink(id);
                self.arena[id].parent = None;
                self.arena[id].marked = false;
                self.arena.splice_before(min, id);
            }
            self.arena[min].child = None;
        }

        self.len -= 1;
        match self.arena.unlink(min) {
            None => self.min = None,
            Some(next) => {
                self.min = Some(next);
                self.consolidate();
            }
        }

        self.arena.free(min).map(|node| node.key)
    }

    /// Decreases the key of the entry behind `id` to `new_key`.
    ///
    /// `new_key` must not exceed the current key; an equal key is accepted
    /// and leaves the structure untouched. O(1) amortized.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidHandle`] if the entry was already extracted or
    /// deleted, [`HeapError::KeyNotDecreased`] if `new_key` is greater than
    /// the current key. Neither error mutates the heap.
    pub fn decrease_key(&mut self, id: EntryId, new_key: i32) -> Result<(), HeapError> {
        let current = self
            .arena
            .get(id)
            .map(|node| node.key)
            .ok_or(HeapError::InvalidHandle)?;
        if new_key > current {
            return Err(HeapError::KeyNotDecreased);
        }

        self.arena[id].key = new_key;

        if let Some(parent) = self.arena[id].parent {
            if new_key < self.arena[parent].key {
                self.cut(id, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if new_key < self.arena[min].key {
                self.min = Some(id);
            }
        }
        Ok(())
    }

    /// Removes an arbitrary entry and returns its key.
    ///
    /// The entry is promoted straight to minimum position (cut to the root
    /// ring, then forced to the front) and extracted. No sentinel key is
    /// written, so keys near `i32::MIN` need no special casing.
    /// O(log n) amortized.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidHandle`] if the entry was already removed.
    pub fn delete(&mut self, id: EntryId) -> Result<i32, HeapError> {
        if !self.arena.contains(id) {
            return Err(HeapError::InvalidHandle);
        }

        if let Some(parent) = self.arena[id].parent {
            self.cut(id, parent);
            self.cascading_cut(parent);
        }
        // The entry may not hold the smallest key, but extract_min removes
        // whatever `min` points at and consolidation recomputes the true
        // minimum from the survivors.
        self.min = Some(id);
        match self.extract_min() {
            Some(key) => Ok(key),
            None => Err(HeapError::InvalidHandle),
        }
    }

    /// Links `child` (a root) under `parent` (a root with the smaller key).
    fn link(&mut self, child: EntryId, parent: EntryId) {
        self.arena.unlink(child);
        self.arena[child].parent = Some(parent);
        self.arena[child].marked = false;
        match self.arena[parent].child {
            Some(head) => self.arena.splice_before(head, child),
            None => self.arena[parent].child = Some(child),
        }
        self.arena[parent].degree += 1;
    }

    /// Merges root trees until at most one tree of each degree remains,
    /// then rebuilds the root ring and recomputes `min`.
    ///
    /// Tie-break on equal keys: the root processed later in the snapshot
    /// becomes the parent (the swap below fires only on strictly smaller).
    fn consolidate(&mut self) {
        let start = match self.min {
            Some(id) => id,
            None => return,
        };

        // One slot per possible degree; +2 keeps the carry chain in range
        // for any reachable node count.
        let max_degree = (self.len.max(1) as f64).log2() as usize + 2;
        let mut by_degree: SmallVec<[Option<EntryId>; 16]> =
            SmallVec::from_elem(None, max_degree + 1);

        for root in self.arena.ring_members(start) {
            let mut x = root;
            let mut d = self.arena[x].degree;

            loop {
                if d >= by_degree.len() {
                    by_degree.resize(d + 1, None);
                }
                let y = match by_degree[d] {
                    Some(y) => y,
                    None => break,
                };
                let (parent, child) = if self.arena[y].key < self.arena[x].key {
                    (y, x)
                } else {
                    (x, y)
                };
                self.link(child, parent);
                by_degree[d] = None;
                x = parent;
                d += 1;
            }
            by_degree[d] = Some(x);
        }

        // Rebuild the root ring from the degree table.
        self.min = None;
        for id in by_degree.into_iter().flatten() {
            self.arena[id].left = id;
            self.arena[id].right = id;
            match self.min {
                None => self.min = Some(id),
                Some(min) => {
                    self.arena.splice_before(min, id);
                    if self.arena[id].key < self.arena[min].key {
                        self.min = Some(id);
                    }
                }
            }
        }
    }

    /// Detaches `id` from `parent`'s child ring and re-roots it.
    fn cut(&mut self, id: EntryId, parent: EntryId) {
        let survivor = self.arena.unlink(id);
        if self.arena[parent].child == Some(id) {
            self.arena[parent].child = survivor;
        }
        self.arena[parent].degree -= 1;

        self.arena[id].parent = None;
        self.arena[id].marked = false;
        match self.min {
            Some(min) => self.arena.splice_before(min, id),
            None => self.min = Some(id),
        }
    }

    /// Walks up from `start`, cutting marked ancestors.
    ///
    /// An unmarked non-root absorbs the loss (it gets marked and the walk
    /// stops); a marked one is cut and the walk continues at its parent.
    /// Iterative, bounded by the height of the tree.
    fn cascading_cut(&mut self, start: EntryId) {
        let mut current = start;
        while let Some(parent) = self.arena[current].parent {
            if !self.arena[current].marked {
                self.arena[current].marked = true;
                return;
            }
            self.cut(current, parent);
            current = parent;
        }
    }

    /// Walks the ring containing `start`, checking doubly-linked
    /// consistency and that every member's parent is `parent`.
    fn ring_ok(&self, start: EntryId, parent: Option<EntryId>) -> Option<RingBuf> {
        let mut members = RingBuf::new();
        let mut current = start;
        loop {
            let node = self.arena.get(current)?;
            if node.parent != parent {
                return None;
            }
            if self.arena.get(node.right)?.left != current
                || self.arena.get(node.left)?.right != current
            {
                return None;
            }
            members.push(current);
            if members.len() > self.len {
                // More members than live entries: the ring is corrupt.
                return None;
            }
            current = node.right;
            if current == start {
                break;
            }
        }
        Some(members)
    }

    /// Walks the entire structure and checks every invariant that must hold
    /// between operations: heap order, sibling-ring consistency, degree and
    /// size bookkeeping, mark hygiene on roots, and `min` correctness.
    ///
    /// O(n); intended for tests and debugging.
    pub fn verify_internal_structure(&self) -> bool {
        let min = match self.min {
            Some(id) => id,
            None => return self.len == 0 && self.arena.len() == 0,
        };
        if self.len == 0 || self.arena.len() != self.len {
            return false;
        }

        let roots = match self.ring_ok(min, None) {
            Some(roots) => roots,
            None => return false,
        };

        let mut queue: VecDeque<EntryId> = roots.iter().copied().collect();
        let mut seen = 0usize;
        let mut smallest = i32::MAX;
        while let Some(id) = queue.pop_front() {
            seen += 1;
            if seen > self.len {
                return false;
            }
            let node = &self.arena[id];
            smallest = smallest.min(node.key);
            if node.parent.is_none() && node.marked {
                return false;
            }
            match node.child {
                None => {
                    if node.degree != 0 {
                        return false;
                    }
                }
                Some(child) => {
                    let children = match self.ring_ok(child, Some(id)) {
                        Some(children) => children,
                        None => return false,
                    };
                    if children.len() != node.degree {
                        return false;
                    }
                    for &c in &children {
                        if self.arena[c].key < node.key {
                            return false;
                        }
                        queue.push_back(c);
                    }
                }
            }
        }

        seen == self.len && smallest == self.arena[min].key
    }
}
