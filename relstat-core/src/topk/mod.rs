//! Bounded top-K selection over a single pass.
//!
//! [`TopK`] keeps the `capacity` items with the greatest [`Ranked::rank_key`]
//! seen so far. It is a min-heap over the retained items: the root is the
//! smallest retained key, so an incoming item only has to beat the root to
//! get in. Memory stays O(capacity) however long the stream is.


use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

pub const DEFAULT_CAPACITY: usize = 10;

/// Something that can be ranked by a comparable key.
pub trait Ranked {
    type Key: Ord + Copy;

    fn rank_key(&self) -> Self::Key;
}

/// Heap slot ordered by key only. Items with equal keys compare equal.
struct Slot<T: Ranked> {
    key: T::Key,
    item: T,
}

impl<T: Ranked> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: Ranked> Eq for Slot<T> {}

impl<T: Ranked> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ranked> Ord for Slot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

pub struct TopK<T: Ranked> {
    capacity: usize,
    heap: BinaryHeap<Reverse<Slot<T>>>,
}

impl<T: Ranked> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // +1 so a replace never reallocates
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(4096)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest retained key, the bar an incoming item has to clear once full.
    pub fn min_key(&self) -> Option<T::Key> {
        self.heap.peek().map(|Reverse(slot)| slot.key)
    }

    /// Offers an item. Returns `true` if it was retained.
    pub fn offer(&mut self, item: T) -> bool {
        if self.capacity == 0 {
            return false;
        }

        let key = item.rank_key();

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(Slot { key, item }));
            return true;
        }

        // Compare and replace under one &mut borrow.
        match self.heap.peek_mut() {
            Some(mut min) if key > min.0.key => {
                *min = Reverse(Slot { key, item });
                true
            }
            _ => false,
        }
    }

    /// Drains the container, largest key first. Order among equal keys is
    /// unspecified.
    pub fn snapshot(&mut self) -> Vec<T> {
        std::mem::take(&mut self.heap)
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(slot)| slot.item)
            .collect()
    }
}

impl<T: Ranked> Default for TopK<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
