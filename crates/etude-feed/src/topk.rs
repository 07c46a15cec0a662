//! Bounded top-K selection.
//!
//! A hand-rolled binary min-heap with a fixed capacity: pushing beyond
//! capacity evicts the smallest element, so after any number of pushes the
//! heap holds the K largest elements seen. Selecting the K most recent items
//! from N candidates costs O(N log K) instead of sorting everything.
//!
//! The heap is deliberately explicit (array-backed, manual sift-up and
//! sift-down) rather than a wrapper around `std::collections::BinaryHeap`:
//! the bounded eviction rule is the point of the structure, and `BinaryHeap`
//! is a max-heap that would need `Reverse` plus an external size check on
//! every push.

/// A min-heap that retains at most `capacity` elements - the largest seen.
///
/// The root (index 0) is always the smallest retained element, which is the
/// eviction candidate once the heap is full. A capacity of zero retains
/// nothing.
#[derive(Debug, Clone)]
pub struct BoundedMinHeap<T: Ord> {
    capacity: usize,
    items: Vec<T>,
}

impl<T: Ord> BoundedMinHeap<T> {
    /// Creates an empty heap that retains at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of retained elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no elements are retained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the smallest retained element, if any.
    pub fn min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Offers `item` to the heap.
    ///
    /// Below capacity the item is always retained. At capacity the item
    /// replaces the current minimum iff it is larger; otherwise it is
    /// dropped. Either way the heap never exceeds `capacity` elements.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }

        if self.items.len() < self.capacity {
            self.items.push(item);
            self.sift_up(self.items.len() - 1);
        } else if item > self.items[0] {
            self.items[0] = item;
            self.sift_down(0);
        }

        debug_assert!(self.items.len() <= self.capacity);
    }

    /// Drains the heap largest-first.
    pub fn into_descending(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(min) = self.pop_min() {
            out.push(min);
        }
        // Repeated pop-min yields ascending order.
        out.reverse();
        out
    }

    /// Removes and returns the smallest element.
    fn pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[idx] >= self.items[parent] {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.items.swap(idx, smallest);
            idx = smallest;
        }
    }
}
