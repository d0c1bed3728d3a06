//! Binary min-heap over externally-keyed items.
//!
//! Each entry pairs a payload with a numeric sort key computed by the
//! caller at insertion time; the key is immutable for the lifetime of the
//! entry. There is no decrease-key operation: a caller whose priority
//! changes reinserts the payload under the new key and discards the stale
//! entry at pop time (see `timed::search` for the dedup side of that
//! contract). Duplicate logical states with different keys may therefore
//! coexist in the queue, and ties among equal keys are broken arbitrarily.

use crate::error::{Result, WayfindError};

#[derive(Debug, Clone)]
struct HeapItem<T, K> {
    item: T,
    key: K,
}

/// Binary min-heap: parent key <= child key for every non-root entry.
#[derive(Debug, Clone)]
pub struct MinHeap<T, K> {
    items: Vec<HeapItem<T, K>>,
}

impl<T, K: PartialOrd + Copy> MinHeap<T, K> {
    pub fn new() -> Self {
        MinHeap { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key of the current minimum entry, if any
    pub fn peek_key(&self) -> Option<K> {
        self.items.first().map(|entry| entry.key)
    }

    /// Insert a single item under a precomputed key. O(log n).
    pub fn push(&mut self, item: T, key: K) {
        self.items.push(HeapItem { item, key });
        self.sift_up(self.items.len() - 1);
    }

    /// Insert many items, then restore the heap invariant with a single
    /// bottom-up heapify pass over the interior nodes.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (T, K)>,
    {
        for (item, key) in entries {
            self.items.push(HeapItem { item, key });
        }
        for index in (0..self.items.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Remove and return the item with the smallest key
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(WayfindError::EmptyQueue);
        }
        let entry = self.items.swap_remove(0);
        self.sift_down(0);
        Ok(entry.item)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].key < self.items[parent].key {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < self.items.len() && self.items[left].key < self.items[smallest].key {
                smallest = left;
            }
            if right < self.items.len() && self.items[right].key < self.items[smallest].key {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, K: PartialOrd + Copy> Default for MinHeap<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_pop_returns_minimum() {
        let mut heap: MinHeap<&str, u32> = MinHeap::new();
        heap.push("mid", 5);
        heap.push("low", 1);
        heap.push("high", 9);
        assert_eq!(heap.pop().unwrap(), "low");
        assert_eq!(heap.pop().unwrap(), "mid");
        assert_eq!(heap.pop().unwrap(), "high");
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut heap: MinHeap<u32, u32> = MinHeap::new();
        assert_eq!(heap.pop(), Err(WayfindError::EmptyQueue));
    }

    #[test]
    fn test_peek_key_tracks_minimum() {
        let mut heap: MinHeap<(), u32> = MinHeap::new();
        assert_eq!(heap.peek_key(), None);
        heap.push((), 7);
        heap.push((), 3);
        assert_eq!(heap.peek_key(), Some(3));
        heap.pop().unwrap();
        assert_eq!(heap.peek_key(), Some(7));
    }

    #[test]
    fn test_extend_restores_invariant() {
        let mut heap: MinHeap<u32, u32> = MinHeap::new();
        heap.push(4, 4);
        heap.extend([(2, 2), (8, 8), (1, 1), (6, 6)]);
        let mut popped = Vec::new();
        while let Ok(item) = heap.pop() {
            popped.push(item);
        }
        assert_eq!(popped, vec![1, 2, 4, 6, 8]);
    }

    #[test]
    fn test_popped_key_never_exceeds_remaining() {
        let mut heap: MinHeap<u32, u32> = MinHeap::new();
        for key in [5, 3, 9, 1, 7, 3] {
            heap.push(key, key);
        }
        while !heap.is_empty() {
            let popped = heap.pop().unwrap();
            if let Some(remaining_min) = heap.peek_key() {
                assert!(popped <= remaining_min);
            }
        }
    }

    #[test]
    fn test_duplicate_keys_coexist() {
        let mut heap: MinHeap<&str, u32> = MinHeap::new();
        heap.push("first", 2);
        heap.push("second", 2);
        heap.push("third", 1);
        assert_eq!(heap.pop().unwrap(), "third");
        // Tie order among equal keys is unspecified; both must come out.
        let mut remaining = [heap.pop().unwrap(), heap.pop().unwrap()];
        remaining.sort_unstable();
        assert_eq!(remaining, ["first", "second"]);
    }

    #[test]
    fn test_stress_random_keys_pop_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap: MinHeap<u64, u64> = MinHeap::with_capacity(1000);
        for _ in 0..1000 {
            let key = rng.gen_range(0..10_000);
            heap.push(key, key);
        }
        let mut previous = 0;
        for _ in 0..1000 {
            let key = heap.pop().unwrap();
            assert!(key >= previous);
            previous = key;
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn test_stress_interleaved_batch_and_pop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut heap: MinHeap<u64, u64> = MinHeap::new();
        for _ in 0..50 {
            let batch: Vec<(u64, u64)> = (0..rng.gen_range(1..20))
                .map(|_| {
                    let key = rng.gen_range(0..1000);
                    (key, key)
                })
                .collect();
            heap.extend(batch);
            let mut previous = None;
            for _ in 0..rng.gen_range(0..10) {
                let Ok(key) = heap.pop() else { break };
                if let Some(prev) = previous {
                    assert!(key >= prev);
                }
                if let Some(remaining_min) = heap.peek_key() {
                    assert!(key <= remaining_min);
                }
                previous = Some(key);
            }
        }
    }
}
