//! Binary min-heap keyed by weight.
//!
//! Equal weights extract in insertion order. That tie-break is deterministic
//! for this implementation only; other heap layouts may pick differently and
//! build a different, equally optimal, tree.

#[derive(Debug)]
struct Entry<T> {
    weight: u64,
    seq: u64,
    item: T,
}

impl<T> Entry<T> {
    #[inline]
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

/// Array-backed binary min-heap.
#[derive(Debug)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty heap with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Number of items in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `item` with the given weight. O(log n).
    pub fn insert(&mut self, weight: u64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { weight, seq, item });
        self.sift_up(self.entries.len() - 1);
    }

    /// Weight and item with the lowest weight, without removing it.
    pub fn peek(&self) -> Option<(u64, &T)> {
        self.entries.first().map(|e| (e.weight, &e.item))
    }

    /// Remove and return the lowest-weight item. O(log n).
    pub fn extract_min(&mut self) -> Option<(u64, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.weight, entry.item))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].key() >= self.entries[parent].key() {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.entries[left].key() < self.entries[smallest].key() {
                smallest = left;
            }
            if right < n && self.entries[right].key() < self.entries[smallest].key() {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
