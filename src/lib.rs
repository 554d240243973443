// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A max-priority queue whose items can be updated or removed in place.
//!
//! An `IndexedPriorityHeap` behaves like a [`BinaryHeap`][bh] of `(priority, value)` pairs, but
//! every push hands back a `Handle`. The handle can later be used to change the item's priority,
//! rewrite its value or take it out of the heap without searching for it. Only the priority is
//! ever compared; the value is an opaque payload. Priorities are ordered by a comparator from the
//! [`compare`][cmp] crate, their natural order by default.
//!
//! Insertion has amortized `O(log n)` time complexity. Popping the greatest item, removing an
//! arbitrary item and updating an item are `O(log n)`. Retrieving the greatest item is `O(1)`.
//!
//! ```
//! use indexed_priority_heap::{IndexedPriorityHeap, Item};
//!
//! let mut heap = IndexedPriorityHeap::new();
//! heap.push(Item::new("low", 1));
//! let mid = heap.push(Item::new("mid", 5));
//! heap.push(Item::new("high", 9));
//!
//! heap.change_priority(mid, 10).unwrap();
//! assert_eq!(heap.pop().unwrap().value, "mid");
//! assert_eq!(heap.pop().unwrap().value, "high");
//! ```
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html
//! [cmp]: https://crates.io/crates/compare

extern crate compare;
#[macro_use] extern crate log;
#[cfg(test)] extern crate rand;

use std::error::Error;
use std::fmt::{self, Debug};
use std::iter;
use std::slice;
use std::vec;
use std::sync::atomic::{AtomicUsize, Ordering};

use compare::{Compare, Natural, natural};

// The heap is stored as two layers:
//
// - `slots` is an arena owning the items. A slot keeps its number for as long
//   as its item is in the heap, so handles can name it.
// - `heap` is a binary max-heap of slot numbers laid out in the usual way
//   (children of `i` at `2i + 1` and `2i + 2`).
//
//   heap:   [3, 0, 2, 1]          slots: 0 -> (p 7, index 1)
//                                        1 -> (p 2, index 3)
//              (3)                       2 -> (p 5, index 2)
//             /   \                      3 -> (p 9, index 0)
//           (0)   (2)
//           /
//         (1)
//
// Every time two positions of `heap` are exchanged, the `index` of both items
// is rewritten. Freed slots go on a free list and their generation is bumped,
// which turns every handle still pointing at them stale.

/// Marks an item that no heap currently owns.
const DETACHED: usize = !0;

static NEXT_HEAP_ID: AtomicUsize = AtomicUsize::new(0);

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

fn left_child(x: usize) -> usize { 2 * x + 1 }

/// The error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no items.
    EmptyCollection,
    /// The handle does not name a current occupant of this heap.
    ///
    /// Either its item has already left the heap, or the handle was issued by
    /// another heap.
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HeapError::EmptyCollection => write!(f, "the heap is empty"),
            HeapError::InvalidHandle => {
                write!(f, "handle does not refer to an item in this heap")
            }
        }
    }
}

impl Error for HeapError {}

/// An entry of an `IndexedPriorityHeap`.
///
/// `value` and `priority` belong to the caller. The position of the item inside the heap is
/// maintained by the heap alone and can only be read through [`index`](#method.index).
///
/// A clone of an item is always detached, even if the original sits in a heap.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Item<V, P> {
    /// Payload carried along with the priority. Never compared.
    pub value: V,
    /// Key deciding the item's place in the heap.
    pub priority: P,
    index: usize,
}

impl<V, P> Item<V, P> {
    /// Returns a detached item.
    pub fn new(value: V, priority: P) -> Item<V, P> {
        Item { value: value, priority: priority, index: DETACHED }
    }

    /// Returns the item's current position in its heap, or `None` if no heap owns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_heap::{IndexedPriorityHeap, Item};
    ///
    /// let mut heap = IndexedPriorityHeap::new();
    /// heap.push(Item::new('a', 3));
    /// assert_eq!(heap.peek().unwrap().index(), Some(0));
    ///
    /// let item = heap.pop().unwrap();
    /// assert_eq!(item.index(), None);
    /// ```
    pub fn index(&self) -> Option<usize> {
        if self.index == DETACHED { None } else { Some(self.index) }
    }

    /// Returns `true` if no heap owns the item.
    pub fn is_detached(&self) -> bool { self.index == DETACHED }

    /// Consumes the item and returns its value and priority.
    pub fn into_parts(self) -> (V, P) { (self.value, self.priority) }
}

impl<V: Clone, P: Clone> Clone for Item<V, P> {
    fn clone(&self) -> Item<V, P> {
        Item::new(self.value.clone(), self.priority.clone())
    }
}

/// An opaque reference to an item pushed onto an `IndexedPriorityHeap`.
///
/// A handle stays valid until its item leaves the heap, through `pop`, `remove`, `clear`,
/// `drain` or by consuming the heap. Handles are checked on every use: a stale handle, or one
/// issued by a different heap, is rejected with `HeapError::InvalidHandle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    owner: usize,
    slot: usize,
    generation: u64,
}

struct Slot<V, P> {
    generation: u64,
    item: Option<Item<V, P>>,
}

impl<V: Clone, P: Clone> Clone for Slot<V, P> {
    // Cloning an item detaches it; the copy in the slot keeps its position.
    fn clone(&self) -> Slot<V, P> {
        let item = self.item.as_ref().map(|item| {
            let mut copy = item.clone();
            copy.index = item.index;
            copy
        });
        Slot { generation: self.generation, item: item }
    }
}

impl<V, P> Slot<V, P> {
    fn item(&self) -> &Item<V, P> {
        match self.item {
            Some(ref item) => item,
            None => unreachable!("heap refers to a vacant slot"),
        }
    }

    fn item_mut(&mut self) -> &mut Item<V, P> {
        match self.item {
            Some(ref mut item) => item,
            None => unreachable!("heap refers to a vacant slot"),
        }
    }
}

/// A max-priority queue with handles for updating and removing arbitrary items.
///
/// The item with the greatest priority, as determined by the comparator, sits at the top. Items
/// with equal priorities leave the heap in an unspecified order.
///
/// A clone is a new heap with a fresh identity: handles issued by the original are rejected by
/// the copy, and the other way round.
pub struct IndexedPriorityHeap<V, P, C: Compare<P> = Natural<P>> {
    id: usize,
    heap: Vec<usize>,
    slots: Vec<Slot<V, P>>,
    free: Vec<usize>,
    cmp: C,
}

impl<V: Clone, P: Clone, C: Compare<P> + Clone> Clone for IndexedPriorityHeap<V, P, C> {
    fn clone(&self) -> IndexedPriorityHeap<V, P, C> {
        IndexedPriorityHeap {
            id: NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed),
            heap: self.heap.clone(),
            slots: self.slots.clone(),
            free: self.free.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<V, P, C: Compare<P> + Default> Default for IndexedPriorityHeap<V, P, C> {
    #[inline]
    fn default() -> IndexedPriorityHeap<V, P, C> {
        Self::with_comparator(C::default())
    }
}

impl<V, P: Ord> IndexedPriorityHeap<V, P> {
    /// Returns an empty heap ordered according to the natural order of its priorities.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_heap::IndexedPriorityHeap;
    ///
    /// let heap = IndexedPriorityHeap::<&str, u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> IndexedPriorityHeap<V, P> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the natural order
    /// of its priorities.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_heap::IndexedPriorityHeap;
    ///
    /// let heap = IndexedPriorityHeap::<&str, u32>::with_capacity(10);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> IndexedPriorityHeap<V, P> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<V, P, C: Compare<P>> IndexedPriorityHeap<V, P, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// Reversing the natural order turns the heap into a min-heap:
    ///
    /// ```
    /// extern crate compare;
    /// extern crate indexed_priority_heap;
    ///
    /// use compare::{Compare, natural};
    /// use indexed_priority_heap::{IndexedPriorityHeap, Item};
    ///
    /// # fn main() {
    /// let mut heap = IndexedPriorityHeap::with_comparator(natural().rev());
    /// heap.push(Item::new("later", 30));
    /// heap.push(Item::new("sooner", 10));
    /// assert_eq!(heap.pop().unwrap().value, "sooner");
    /// # }
    /// ```
    pub fn with_comparator(cmp: C) -> IndexedPriorityHeap<V, P, C> {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> IndexedPriorityHeap<V, P, C> {
        IndexedPriorityHeap {
            id: NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed),
            heap: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: vec![],
            cmp: cmp,
        }
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<'_, V, P> {
        debug_assert!(self.is_valid());
        Iter { positions: self.heap.iter(), slots: &self.slots }
    }

    /// Returns a reference to the greatest item in the heap.
    ///
    /// Returns `HeapError::EmptyCollection` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_heap::{HeapError, IndexedPriorityHeap, Item};
    ///
    /// let mut heap = IndexedPriorityHeap::new();
    /// assert_eq!(heap.peek(), Err(HeapError::EmptyCollection));
    ///
    /// heap.push(Item::new("a", 1));
    /// heap.push(Item::new("b", 2));
    /// assert_eq!(heap.peek().unwrap().value, "b");
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn peek(&self) -> Result<&Item<V, P>, HeapError> {
        debug_assert!(self.is_valid());
        match self.heap.first() {
            Some(&slot) => Ok(self.slots[slot].item()),
            None => Err(HeapError::EmptyCollection),
        }
    }

    /// Returns a handle to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek_handle(&self) -> Option<Handle> {
        self.heap.first().map(|&slot| self.handle(slot))
    }

    /// Returns a reference to the item named by `handle`.
    ///
    /// Returns `None` if the handle is not valid for this heap.
    pub fn get(&self, handle: Handle) -> Option<&Item<V, P>> {
        self.locate(handle).ok().map(|pos| self.entry(pos))
    }

    /// Returns `true` if `handle` names an item currently in this heap.
    pub fn contains(&self, handle: Handle) -> bool {
        self.locate(handle).is_ok()
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.heap.reserve_exact(additional);
        self.slots.reserve_exact(additional.saturating_sub(self.free.len()));
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.slots.reserve(additional.saturating_sub(self.free.len()));
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.heap.shrink_to_fit();
        self.free.shrink_to_fit();
    }

    /// Pushes an item onto the heap and returns a handle to it.
    ///
    /// Whatever position the item carried before is ignored.
    pub fn push(&mut self, mut item: Item<V, P>) -> Handle {
        debug_assert!(self.is_valid());
        let pos = self.heap.len();
        item.index = pos;
        let slot = self.occupy(item);
        self.heap.push(slot);
        self.sift_up(pos);
        debug_assert!(self.is_valid());
        self.handle(slot)
    }

    /// Removes the greatest item from the heap and returns it, detached.
    ///
    /// Returns `HeapError::EmptyCollection` if the heap is empty.
    pub fn pop(&mut self) -> Result<Item<V, P>, HeapError> {
        debug_assert!(self.is_valid());
        if self.heap.is_empty() {
            return Err(HeapError::EmptyCollection);
        }
        let max = self.remove_at(0);
        debug_assert!(self.is_valid());
        Ok(max)
    }

    /// Removes the item named by `handle` from the heap and returns it, detached.
    ///
    /// Returns `HeapError::InvalidHandle` if the item is no longer in this heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_heap::{HeapError, IndexedPriorityHeap, Item};
    ///
    /// let mut heap = IndexedPriorityHeap::new();
    /// let a = heap.push(Item::new("a", 4));
    /// heap.push(Item::new("b", 8));
    ///
    /// assert_eq!(heap.remove(a).unwrap().into_parts(), ("a", 4));
    /// assert_eq!(heap.remove(a), Err(HeapError::InvalidHandle));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn remove(&mut self, handle: Handle) -> Result<Item<V, P>, HeapError> {
        debug_assert!(self.is_valid());
        let pos = self.locate(handle)?;
        let item = self.remove_at(pos);
        debug_assert!(self.is_valid());
        Ok(item)
    }

    /// Replaces the value and priority of the item named by `handle` and moves it to its new
    /// place in the heap.
    ///
    /// Returns `HeapError::InvalidHandle` if the item is no longer in this heap. The handle
    /// remains valid afterwards.
    pub fn update(&mut self, handle: Handle, value: V, priority: P) -> Result<(), HeapError> {
        debug_assert!(self.is_valid());
        let pos = self.locate(handle)?;
        {
            let item = self.entry_mut(pos);
            item.value = value;
            item.priority = priority;
        }
        self.restore(pos);
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Replaces the priority of the item named by `handle` and moves it to its new place in the
    /// heap.
    ///
    /// Returns `HeapError::InvalidHandle` if the item is no longer in this heap.
    pub fn change_priority(&mut self, handle: Handle, priority: P) -> Result<(), HeapError> {
        debug_assert!(self.is_valid());
        let pos = self.locate(handle)?;
        self.entry_mut(pos).priority = priority;
        self.restore(pos);
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Replaces the value and priority of the greatest item and moves it to its new place in the
    /// heap.
    ///
    /// Returns `HeapError::EmptyCollection` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_heap::{IndexedPriorityHeap, Item};
    ///
    /// let mut heap = IndexedPriorityHeap::new();
    /// heap.push(Item::new("a", 1));
    /// heap.push(Item::new("b", 2));
    ///
    /// heap.update_max("c", 0).unwrap();
    /// assert_eq!(heap.peek().unwrap().value, "a");
    /// ```
    pub fn update_max(&mut self, value: V, priority: P) -> Result<(), HeapError> {
        debug_assert!(self.is_valid());
        if self.heap.is_empty() {
            return Err(HeapError::EmptyCollection);
        }
        {
            let item = self.entry_mut(0);
            item.value = value;
            item.priority = priority;
        }
        self.sift_down(0);
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Consumes the heap and returns its items, detached, as a vector in arbitrary order.
    pub fn into_vec(mut self) -> Vec<Item<V, P>> {
        // `Drain` borrows `self` and must be dropped before `self` is.
        let items = self.drain().collect::<Vec<_>>();
        items
    }

    /// Consumes the heap and returns its items, detached, as a vector in sorted (ascending)
    /// order of priority.
    pub fn into_sorted_vec(mut self) -> Vec<Item<V, P>> {
        let mut vec = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            vec.push(item);
        }
        vec.reverse();
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all items from the heap. Every handle issued so far becomes invalid.
    pub fn clear(&mut self) {
        trace!("clearing {} items from heap {}", self.heap.len(), self.id);
        while let Some(slot) = self.heap.pop() {
            self.vacate(slot);
        }
    }

    /// Clears the heap, returning an iterator over the removed items, detached, in arbitrary
    /// order.
    ///
    /// The heap is empty once the iterator is dropped, even if it was not exhausted.
    pub fn drain(&mut self) -> Drain<'_, V, P, C> {
        trace!("draining {} items from heap {}", self.heap.len(), self.id);
        Drain { heap: self }
    }

    fn handle(&self, slot: usize) -> Handle {
        Handle { owner: self.id, slot: slot, generation: self.slots[slot].generation }
    }

    /// Resolves a handle to the position of its item.
    fn locate(&self, handle: Handle) -> Result<usize, HeapError> {
        if handle.owner != self.id {
            debug!("handle from heap {} rejected by heap {}", handle.owner, self.id);
            return Err(HeapError::InvalidHandle);
        }
        match self.slots.get(handle.slot) {
            Some(&Slot { generation, item: Some(ref item) }) if generation == handle.generation => {
                Ok(item.index)
            }
            _ => {
                debug!("stale handle to slot {} rejected by heap {}", handle.slot, self.id);
                Err(HeapError::InvalidHandle)
            }
        }
    }

    fn entry(&self, pos: usize) -> &Item<V, P> {
        self.slots[self.heap[pos]].item()
    }

    fn entry_mut(&mut self, pos: usize) -> &mut Item<V, P> {
        let slot = self.heap[pos];
        self.slots[slot].item_mut()
    }

    /// Stores an item in a free slot, growing the arena if there is none.
    fn occupy(&mut self, item: Item<V, P>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot].item = Some(item);
                slot
            }
            None => {
                self.slots.push(Slot { generation: 0, item: Some(item) });
                self.slots.len() - 1
            }
        }
    }

    /// Takes the item out of a slot that is no longer referenced by `heap`.
    fn vacate(&mut self, slot: usize) -> Item<V, P> {
        let mut item = {
            let entry = &mut self.slots[slot];
            entry.generation += 1;
            match entry.item.take() {
                Some(item) => item,
                None => unreachable!("slot {} vacated twice", slot),
            }
        };
        item.index = DETACHED;
        self.free.push(slot);
        item
    }

    /// Removes the item at `pos`, moving the last item into the gap.
    fn remove_at(&mut self, pos: usize) -> Item<V, P> {
        let slot = self.heap.swap_remove(pos);
        if pos < self.heap.len() {
            self.entry_mut(pos).index = pos;
            self.restore(pos);
        }
        self.vacate(slot)
    }

    /// Returns `true` if the item at `a` has a strictly greater priority than the one at `b`.
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.cmp.compares_gt(&self.entry(a).priority, &self.entry(b).priority)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.entry_mut(a).index = a;
        self.entry_mut(b).index = b;
    }

    /// Moves the item at `pos` towards the root or the leaves, whichever its priority calls for.
    fn restore(&mut self, pos: usize) {
        if pos > 0 && self.outranks(pos, parent(pos)) {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let par = parent(pos);
            if !self.outranks(pos, par) { break; }
            self.swap(pos, par);
            pos = par;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let c1 = left_child(pos);
            let c2 = c1 + 1;
            if self.heap.len() <= c1 { return; } // No children. We're done.
            // Pick the greater child, the left one on ties
            let ch = if c2 < self.heap.len() && self.outranks(c2, c1) { c2 } else { c1 };
            if !self.outranks(ch, pos) { return; }
            self.swap(ch, pos);
            pos = ch;
        }
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if:
    ///
    /// 1. Each item in `heap` is stored in an occupied slot whose index is the item's position,
    ///    AND
    /// 2. Every slot is either referenced by `heap` or on the free list, AND
    /// 3. No item's priority is greater than its parent's priority.
    fn is_valid(&self) -> bool {
        let indexed = self.heap.iter().enumerate().all(|(pos, &slot)| {
            match self.slots.get(slot) {
                Some(&Slot { item: Some(ref item), .. }) => item.index == pos,
                _ => false,
            }
        });

        indexed &&                                                   // 1
        self.slots.len() == self.heap.len() + self.free.len() &&     // 2
        (1..self.heap.len()).all(|pos| !self.outranks(pos, parent(pos))) // 3
    }
}

impl<V: Debug, P: Debug, C: Compare<P>> Debug for IndexedPriorityHeap<V, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<V, P, C: Compare<P> + Default> iter::FromIterator<Item<V, P>> for IndexedPriorityHeap<V, P, C> {
    fn from_iter<I: IntoIterator<Item = Item<V, P>>>(iter: I) -> IndexedPriorityHeap<V, P, C> {
        let mut heap = IndexedPriorityHeap::default();
        heap.extend(iter);
        heap
    }
}

impl<V, P, C: Compare<P>> Extend<Item<V, P>> for IndexedPriorityHeap<V, P, C> {
    fn extend<I: IntoIterator<Item = Item<V, P>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

/// An iterator over an `IndexedPriorityHeap` in arbitrary order.
///
/// Acquire through [`IndexedPriorityHeap::iter`](struct.IndexedPriorityHeap.html#method.iter).
pub struct Iter<'a, V: 'a, P: 'a> {
    positions: slice::Iter<'a, usize>,
    slots: &'a [Slot<V, P>],
}

impl<'a, V, P> Clone for Iter<'a, V, P> {
    fn clone(&self) -> Iter<'a, V, P> {
        Iter { positions: self.positions.clone(), slots: self.slots }
    }
}

impl<'a, V, P> Iterator for Iter<'a, V, P> {
    type Item = &'a Item<V, P>;
    #[inline] fn next(&mut self) -> Option<&'a Item<V, P>> {
        let slots = self.slots;
        self.positions.next().map(|&slot| slots[slot].item())
    }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.positions.size_hint() }
}

impl<'a, V, P> DoubleEndedIterator for Iter<'a, V, P> {
    fn next_back(&mut self) -> Option<&'a Item<V, P>> {
        let slots = self.slots;
        self.positions.next_back().map(|&slot| slots[slot].item())
    }
}

impl<'a, V, P> ExactSizeIterator for Iter<'a, V, P> {}

/// A consuming iterator over an `IndexedPriorityHeap` in arbitrary order.
///
/// Acquire through [`IntoIterator::into_iter`](
/// https://doc.rust-lang.org/stable/std/iter/trait.IntoIterator.html#tymethod.into_iter).
pub struct IntoIter<V, P>(vec::IntoIter<Item<V, P>>);

impl<V, P> Iterator for IntoIter<V, P> {
    type Item = Item<V, P>;
    fn next(&mut self) -> Option<Item<V, P>> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<V, P> DoubleEndedIterator for IntoIter<V, P> {
    fn next_back(&mut self) -> Option<Item<V, P>> { self.0.next_back() }
}

impl<V, P> ExactSizeIterator for IntoIter<V, P> {}

/// An iterator that drains an `IndexedPriorityHeap` in arbitrary order.
///
/// Acquire through [`IndexedPriorityHeap::drain`](struct.IndexedPriorityHeap.html#method.drain).
pub struct Drain<'a, V: 'a, P: 'a, C: 'a + Compare<P> = Natural<P>> {
    heap: &'a mut IndexedPriorityHeap<V, P, C>,
}

impl<'a, V: 'a, P: 'a, C: 'a + Compare<P>> Iterator for Drain<'a, V, P, C> {
    type Item = Item<V, P>;

    // Taking from the back of the array never breaks the heap order.
    fn next(&mut self) -> Option<Item<V, P>> {
        match self.heap.heap.pop() {
            Some(slot) => Some(self.heap.vacate(slot)),
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<'a, V: 'a, P: 'a, C: 'a + Compare<P>> ExactSizeIterator for Drain<'a, V, P, C> {}

impl<'a, V: 'a, P: 'a, C: 'a + Compare<P>> Drop for Drain<'a, V, P, C> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<V, P, C: Compare<P>> IntoIterator for IndexedPriorityHeap<V, P, C> {
    type Item = Item<V, P>;
    type IntoIter = IntoIter<V, P>;
    fn into_iter(self) -> IntoIter<V, P> { IntoIter(self.into_vec().into_iter()) }
}

impl<'a, V, P, C: Compare<P>> IntoIterator for &'a IndexedPriorityHeap<V, P, C> {
    type Item = &'a Item<V, P>;
    type IntoIter = Iter<'a, V, P>;
    fn into_iter(self) -> Iter<'a, V, P> { self.iter() }
}
