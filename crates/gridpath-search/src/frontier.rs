use std::collections::BinaryHeap;

use gridpath_core::Point;

/// Heap entry, ordered so `BinaryHeap` (a max-heap) pops the smallest
/// distance first and, among equal distances, the earliest push.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) pos: Point,
    pub(crate) distance: u32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Cells discovered but not yet finalised.
///
/// Entries are never decreased in place; a better distance pushes a new
/// entry and the old one is skipped when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    pub(crate) fn push(&mut self, pos: Point, distance: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { pos, distance, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
