//! Circular sibling-ring primitives
//!
//! Every level of the heap forest is a circular doubly linked list: the root
//! ring, and one child ring per parent. These operations are purely
//! structural; they know nothing about keys or heap order, and they never
//! fail. A node alone in a ring points at itself through both links.

use smallvec::SmallVec;

use crate::arena::{EntryId, NodeArena};

/// Snapshot buffer for ring walks. Degrees stay logarithmic in the heap
/// size, so rings are short and usually fit inline.
pub(crate) type RingBuf = SmallVec<[EntryId; 8]>;

impl NodeArena {
    /// Inserts `new` immediately to the left of `at`.
    ///
    /// `new` must be a singleton ring (as produced by `alloc` or `unlink`);
    /// `at` may be any member of the destination ring.
    pub(crate) fn splice_before(&mut self, at: EntryId, new: EntryId) {
        debug_assert_eq!(self[new].left, new, "new node must be a singleton");

        let at_left = self[at].left;
        self[new].left = at_left;
        self[new].right = at;
        self[at_left].right = new;
        self[at].left = new;
    }

    /// Excises `id` from its ring, re-linking its former neighbors.
    ///
    /// Afterwards `id` is a singleton ring. Returns the former right
    /// neighbor, or `None` if `id` was the ring's sole member.
    pub(crate) fn unlink(&mut self, id: EntryId) -> Option<EntryId> {
        let left = self[id].left;
        let right = self[id].right;
        if right == id {
            return None;
        }

        self[left].right = right;
        self[right].left = left;
        self[id].left = id;
        self[id].right = id;
        Some(right)
    }

    /// Collects the members of the ring containing `start`, in `right`
    /// order beginning at `start`.
    ///
    /// The snapshot stays valid while members are unlinked or relinked,
    /// which is exactly what consolidation and child promotion need: walking
    /// the live ring while relinking it would skip or revisit nodes.
    pub(crate) fn ring_members(&self, start: EntryId) -> RingBuf {
        let mut members = RingBuf::new();
        let mut current = start;
        loop {
            members.push(current);
            current = self[current].right;
            if current == start {
                break;
            }
        }
        members
    }
}
