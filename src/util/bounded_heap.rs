// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! A binary heap that only retains the items with the highest keys.
//!
//! Items do not need to implement [`Ord`]. Instead, a key function derives an `Ord` value from
//! each item when it is pushed. The key function is never called again for items already present
//! in the heap. If a capacity limit is set, pushing an item into a full heap evicts the item with
//! the lowest key.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// An item that is stored in [`BoundedKeyedHeap`].
struct Item<T, K>
where
    K: Ord,
{
    /// The value.
    value: T,
    /// The key that is used for ordering (derived by the key function).
    key: K,
}

impl<T, K> PartialEq for Item<T, K>
where
    K: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T, K> Eq for Item<T, K> where K: Ord {}

impl<T, K> Ord for Item<T, K>
where
    K: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<T, K> PartialOrd for Item<T, K>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue that keeps at most `limit` items with the highest keys.
pub struct BoundedKeyedHeap<T, F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Min-heap, so that the item with the lowest key can be evicted cheaply.
    heap: BinaryHeap<Reverse<Item<T, K>>>,
    /// Maximum number of retained items (`None` means unlimited).
    limit: Option<usize>,
    /// The key function.
    key_fn: F,
}

impl<T, F, K> BoundedKeyedHeap<T, F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Create a new heap with the given item limit and key function.
    pub fn new(limit: Option<usize>, key_fn: F) -> Self {
        let heap = limit.map_or_else(BinaryHeap::new, |limit| {
            BinaryHeap::with_capacity(limit.saturating_add(1))
        });
        BoundedKeyedHeap {
            heap,
            limit,
            key_fn,
        }
    }

    /// Pushes an item onto the heap, evicting the lowest item if the limit is exceeded.
    pub fn push(&mut self, value: T) {
        if self.limit == Some(0) {
            return;
        }

        let key = (self.key_fn)(&value);
        if let Some(limit) = self.limit {
            if self.heap.len() >= limit {
                match self.heap.peek() {
                    Some(Reverse(lowest)) if lowest.key >= key => return,
                    _ => (),
                }
                drop(self.heap.pop());
            }
        }
        self.heap.push(Reverse(Item { value, key }));
    }

    /// Number of retained items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Consumes the heap and returns a vector in descending key order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        // Ascending order of `Reverse` items is descending order of their keys.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item.value)
            .collect::<Vec<T>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn str_len(value: &impl AsRef<str>) -> usize {
        value.as_ref().len()
    }

    #[test]
    fn test_bounded_heap_unlimited() {
        let mut heap = BoundedKeyedHeap::new(None, str_len);
        heap.push("aa");
        heap.push("a");
        heap.push("aaa");
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.into_sorted_vec(), vec!["aaa", "aa", "a"]);
    }

    #[test]
    fn test_bounded_heap_limit() {
        let mut heap = BoundedKeyedHeap::new(Some(2), str_len);
        heap.push("aa".to_string());
        heap.push("a".to_string());
        heap.push("aaaa".to_string());
        heap.push("aaa".to_string());
        assert_eq!(heap.len(), 2);
        assert_eq!(
            heap.into_sorted_vec(),
            vec![String::from("aaaa"), String::from("aaa")]
        );
    }

    #[test]
    fn test_bounded_heap_keeps_first_on_tie() {
        let mut heap = BoundedKeyedHeap::new(Some(1), |x: &(u32, char)| x.0);
        heap.push((5, 'a'));
        heap.push((5, 'b'));
        assert_eq!(heap.into_sorted_vec(), vec![(5, 'a')]);
    }

    #[test]
    fn test_bounded_heap_zero_limit() {
        let mut heap = BoundedKeyedHeap::new(Some(0), str_len);
        heap.push("a");
        assert_eq!(heap.len(), 0);
        assert!(heap.into_sorted_vec().is_empty());
    }
}
