//! Defines a singly-linked list with O(1) append, and its removing cursor.

mod cursor;

use alloc::vec::Vec;
use core::{
    cell::Cell,
    fmt::{Debug, Formatter},
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{error::Error, list::List};

pub use self::cursor::LinkedCursor;

struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A one-way linked list.
///
/// Nodes live in slots of an arena owned by the list and are chained by slot number, so the
/// list can keep a second handle on its last node: appending is O(1), and so is reading the
/// last element. Everything else that targets an index walks the chain from the front:
///
/// | operation                           | cost                      |
/// |-------------------------------------|---------------------------|
/// | [`List::add`], [`Self::push_front`] | O(1)                      |
/// | [`List::insert`] at `0` or `len`    | O(1)                      |
/// | [`List::insert`] elsewhere          | O(index)                  |
/// | [`List::remove`] at `0`             | O(1)                      |
/// | [`List::remove`] elsewhere          | O(index), even the last   |
/// | [`List::get`] at `len - 1`          | O(1)                      |
/// | [`List::get`] elsewhere             | O(index) or less, see below |
///
/// Removing the last element still walks the chain: its predecessor has to be found.
///
/// The list remembers the last node an indexed lookup reached. A later lookup at the same or a
/// higher index resumes from there, so reading `get(0), get(1), ...` in order is O(1) per step.
/// Any structural change (add/insert/remove/clear) forgets it.
///
/// Slots freed by removals are recycled by later additions. Once more than half of the slots
/// are empty, the nodes are moved into a fresh arena sized to the list, so a list that shrinks
/// gives its memory back. [`List::clear`] releases the arena entirely.
///
/// The walk cache is updated through `&self`, so the list is [`Send`] but not [`Sync`]: a
/// `&LinkedList` cannot be shared between threads, even for reading.
///
/// ## Positions
///
/// A [`Position`] names a node (or the spot before the first one) of the list that issued it,
/// and stays valid until the next structural change. [`Self::remove_after`] uses one to unlink a node in O(1); this is
/// how [`LinkedCursor`] removes while iterating without walking the chain again.
///
/// Example:
/// ```
/// use nanocoll::{LinkedList, List};
/// let mut l = LinkedList::new();
/// for x in [5, 6, 7, 8, 9] {
///     l.add(x).unwrap();
/// }
/// assert_eq!(l.get(4), Some(&9));
/// assert_eq!(l.remove(0), Some(5));
/// assert!(l.insert(1, 66).is_ok());
/// assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![6, 66, 7, 8, 9]);
/// ```
///
pub struct LinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    /// Tells this list's positions apart from those of other lists.
    id: usize,
    stamp: u64,
    /// `(index, slot)` of the node the last indexed walk stopped at.
    walk: Cell<Option<(usize, usize)>>,
}

/// An opaque handle on a place in a [`LinkedList`]: either a node, or the spot before the
/// first node.
///
/// Positions are only valid until the list is structurally changed (by anything other than
/// the position-based operation that was handed the position). Stale positions, and
/// positions issued by another list (a clone included), are detected and rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Position {
    list: usize,
    node: Option<usize>,
    stamp: u64,
}

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(0);

#[cfg(target_has_atomic = "ptr")]
fn next_list_id() -> usize {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

// No compare-and-swap on this target (e.g. thumbv6m): a plain load and store.
#[cfg(not(target_has_atomic = "ptr"))]
fn next_list_id() -> usize {
    let id = NEXT_LIST_ID.load(Ordering::Relaxed);
    NEXT_LIST_ID.store(id.wrapping_add(1), Ordering::Relaxed);
    id
}

impl<T>
LinkedList<T> {
    /// Creates an empty list. Nothing is allocated.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            id: next_list_id(),
            stamp: 0,
            walk: Cell::new(None),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut l = Self::new();
        l.slots.reserve_exact(capacity);
        l
    }

    ////////////////////////////////////////////////////////////////////
    // nodes

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Stores a detached node holding `value`, reusing a freed slot if there is one.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Some(Node { value, next });
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                slot
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    /// Empties the slot of a node that is no longer chained, returning its value.
    fn release(&mut self, slot: usize) -> Option<T> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        Some(node.value)
    }

    /// Must follow every structural change: invalidates positions and the walk cache.
    fn touched(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
        self.walk.set(None);
    }

    /// Slot of the node at `index`; `None` if out of bounds.
    fn walk(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return self.tail;
        }
        let (mut i, mut slot) = match self.walk.get() {
            Some((i, slot)) if i <= index => (i, slot),
            _ => (0, self.head?),
        };
        while i < index {
            slot = self.node(slot)?.next?;
            i += 1;
        }
        self.walk.set(Some((index, slot)));
        Some(slot)
    }

    /// Moves the chained nodes, in order, into a fresh arena holding exactly `len` slots.
    /// Returns the new slot of the node that was in `keep`.
    fn compact(&mut self, keep: Option<usize>) -> Option<usize> {
        trace!("compacting list arena from {} to {} slots", self.slots.len(), self.len);
        let mut slots = Vec::with_capacity(self.len);
        let mut kept = None;
        let mut cur = self.head;
        while let Some(slot) = cur {
            let Some(mut node) = self.slots.get_mut(slot).and_then(Option::take) else { break };
            if keep == Some(slot) {
                kept = Some(slots.len());
            }
            cur = node.next;
            node.next = cur.map(|_| slots.len() + 1);
            slots.push(Some(node));
        }
        self.head = if slots.is_empty() { None } else { Some(0) };
        self.tail = slots.len().checked_sub(1);
        self.slots = slots;
        self.free = Vec::new();
        self.walk.set(None);
        kept
    }

    /// Unlinks and returns the node following the node in `prev` (the first node if `None`).
    ///
    /// If that leaves more empty slots than nodes, the arena is compacted and `prev` is updated
    /// to the new slot of its node.
    fn unlink_after(&mut self, prev: &mut Option<usize>) -> Option<T> {
        let prev_slot = *prev;
        let target = match prev_slot {
            Some(p) => self.node(p)?.next?,
            None => self.head?,
        };
        let after = self.node(target)?.next;
        match prev_slot {
            Some(p) => self.node_mut(p)?.next = after,
            None => self.head = after,
        }
        if after.is_none() {
            self.tail = prev_slot;
        }
        self.len -= 1;
        self.touched();
        let removed = self.release(target);
        if self.free.len() > self.len {
            *prev = self.compact(prev_slot);
        }
        removed
    }

    ////////////////////////////////////////////////////////////////////
    // push / pop

    /// Adds an element after the last one. O(1).
    pub fn push_back(&mut self, item: T) {
        let slot = self.alloc(item, None);
        match self.tail.and_then(|t| self.node_mut(t)) {
            Some(last) => last.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        self.touched();
    }

    /// Adds an element before the first one. O(1).
    pub fn push_front(&mut self, item: T) {
        let slot = self.alloc(item, self.head);
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.len += 1;
        self.touched();
    }

    /// Removes the first element and returns it; `None` if the list is empty. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(&mut None)
    }

    ////////////////////////////////////////////////////////////////////
    // get

    /// Returns the first element; `None` if the list is empty. O(1).
    pub fn front(&self) -> Option<&T> {
        Some(&self.node(self.head?)?.value)
    }

    /// Returns the last element; `None` if the list is empty. O(1).
    pub fn back(&self) -> Option<&T> {
        Some(&self.node(self.tail?)?.value)
    }

    /// Returns the last element mutably; `None` if the list is empty. O(1).
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        Some(&mut self.node_mut(tail)?.value)
    }

    /// Returns an iterator over the elements, from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Returns a cursor that can remove elements while iterating.
    pub fn cursor(&mut self) -> LinkedCursor<'_, T> {
        LinkedCursor::new(self)
    }

    ////////////////////////////////////////////////////////////////////
    // positions

    /// Returns the position before the first node.
    pub fn before_head(&self) -> Position {
        Position { list: self.id, node: None, stamp: self.stamp }
    }

    /// Returns the position of the node at `index`; `None` if the index is out of bounds.
    pub fn position(&self, index: usize) -> Option<Position> {
        let slot = self.walk(index)?;
        Some(Position { list: self.id, node: Some(slot), stamp: self.stamp })
    }

    fn is_current(&self, pos: Position) -> bool {
        pos.list == self.id
            && pos.stamp == self.stamp
            && pos.node.map_or(true, |slot| self.node(slot).is_some())
    }

    /// Returns the position of the node following `pos`;
    /// `None` if there is none, or if `pos` is stale or foreign.
    pub fn next_position(&self, pos: Position) -> Option<Position> {
        if !self.is_current(pos) {
            return None;
        }
        let next = match pos.node {
            Some(slot) => self.node(slot)?.next?,
            None => self.head?,
        };
        Some(Position { list: self.id, node: Some(next), stamp: self.stamp })
    }

    /// Returns the element at `pos`;
    /// `None` for the position before the first node, or if `pos` is stale or foreign.
    pub fn get_at(&self, pos: Position) -> Option<&T> {
        if !self.is_current(pos) {
            return None;
        }
        Some(&self.node(pos.node?)?.value)
    }

    /// Returns the element at `pos` mutably;
    /// `None` for the position before the first node, or if `pos` is stale or foreign.
    pub fn get_at_mut(&mut self, pos: Position) -> Option<&mut T> {
        if !self.is_current(pos) {
            return None;
        }
        Some(&mut self.node_mut(pos.node?)?.value)
    }

    /// Removes and returns the element following `pos`, in O(1).
    ///
    /// On success `pos` is refreshed: it keeps naming the same place and stays usable, while
    /// every other position becomes stale. Returns `None` (list unchanged) if `pos` is stale,
    /// was issued by another list, or is the last node.
    pub fn remove_after(&mut self, pos: &mut Position) -> Option<T> {
        if !self.is_current(*pos) {
            return None;
        }
        let removed = self.unlink_after(&mut pos.node)?;
        pos.stamp = self.stamp;
        Some(removed)
    }
}

impl<T>
List<T> for LinkedList<T> {
    fn add(&mut self, item: T) -> Result<(), Error<T>> {
        self.push_back(item);
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), Error<T>> {
        if index == 0 {
            self.push_front(item);
            return Ok(());
        }
        if index == self.len {
            self.push_back(item);
            return Ok(());
        }
        let Some(prev) = self.walk(index - 1) else {
            return Err(Error::out_of_bounds(item, index, self.len));
        };
        let next = self.node(prev).and_then(|n| n.next);
        let slot = self.alloc(item, next);
        if let Some(p) = self.node_mut(prev) {
            p.next = Some(slot);
        }
        self.len += 1;
        self.touched();
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let mut prev = match index {
            0 => None,
            _ => Some(self.walk(index - 1)?),
        };
        self.unlink_after(&mut prev)
    }

    fn get(&self, index: usize) -> Option<&T> {
        Some(&self.node(self.walk(index)?)?.value)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.walk(index)?;
        Some(&mut self.node_mut(slot)?.value)
    }

    fn len(&self) -> usize { self.len }

    /// Removes all elements and releases the arena.
    fn clear(&mut self) {
        self.slots = Vec::new();
        self.free = Vec::new();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.touched();
    }

    fn find(&self, item: &T, start: usize) -> Option<usize>
        where
            T: PartialEq,
    {
        let first = self.walk(start)?;
        let mut tail = Iter {
            list: self,
            next: Some(first),
            remaining: self.len - start,
        };
        tail.position(|x| x == item).map(|i| start + i)
    }

    fn contains(&self, item: &T) -> bool
        where
            T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }
}

impl<T: Clone>
Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.extend(self.iter().cloned());
        copy
    }

    /// Makes this list an element-wise copy of `source`, reusing this list's nodes.
    ///
    /// Existing nodes are overwritten in chain order; new nodes are allocated only if `source`
    /// is longer. If it is shorter, the surplus nodes are dropped and the arena is shrunk to
    /// the copied length.
    fn clone_from(&mut self, source: &Self) {
        let mut src = source.iter();
        let mut copied = 0;
        let mut last = None;
        let mut cur = self.head;
        while let Some(slot) = cur {
            let Some(value) = src.next() else { break };
            let Some(node) = self.node_mut(slot) else { break };
            node.value.clone_from(value);
            cur = node.next;
            last = Some(slot);
            copied += 1;
        }

        // cut the chain after the last overwritten node and release the rest
        match last.and_then(|slot| self.node_mut(slot)) {
            Some(node) => node.next = None,
            None => self.head = None,
        }
        while let Some(slot) = cur {
            cur = self.node(slot).and_then(|n| n.next);
            self.release(slot);
        }
        self.tail = last;
        self.len = copied;
        self.touched();
        if !self.free.is_empty() {
            self.compact(None);
        }

        for value in src {
            self.push_back(value.clone());
        }
    }
}

impl<T>
Default for LinkedList<T> {
    fn default() -> Self { Self::new() }
}

impl<T>
FromIterator<T> for LinkedList<T> {
    fn from_iter<It: IntoIterator<Item=T>>(iter: It) -> Self {
        let mut l = Self::new();
        l.extend(iter);
        l
    }
}

impl<T>
Extend<T> for LinkedList<T> {
    fn extend<It: IntoIterator<Item=T>>(&mut self, iter: It) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

/// Iterator over the elements of a [`LinkedList`], from first to last.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T>
Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.node(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T>
IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Self-iterates by popping from the front.
pub struct IntoIter<T>(LinkedList<T>);

impl<T>
Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.pop_front() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len, Some(self.0.len)) }
}

impl<T>
IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { IntoIter(self) }
}

// Slot layout never takes part in the comparison.
impl<T: PartialEq>
PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq>
Eq for LinkedList<T> {}

impl<T: Debug>
Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;
    use std::vec;
    use std::vec::Vec;
    use super::*;

    fn five() -> LinkedList<i32> {
        [5, 6, 7, 8, 9].into_iter().collect()
    }

    fn contents<T: Clone>(l: &LinkedList<T>) -> Vec<T> {
        l.iter().cloned().collect()
    }

    /// Checks the chain against the bookkeeping: acyclic, `len` nodes, tail is the last one.
    fn check_chain<T>(l: &LinkedList<T>) {
        let mut seen = 0;
        let mut last = None;
        let mut cur = l.head;
        while let Some(slot) = cur {
            seen += 1;
            assert!(seen <= l.slots.len(), "cycle");
            last = Some(slot);
            cur = l.node(slot).unwrap().next;
        }
        assert_eq!(seen, l.len);
        assert_eq!(last, l.tail);
        assert_eq!(l.slots.iter().filter(|s| s.is_some()).count(), l.len);
        assert_eq!(l.free.len() + l.len, l.slots.len());
    }

    #[test]
    fn first_list_test() {
        let mut l = five();
        assert_eq!(l.len(), 5);
        assert_eq!(l.get(3), Some(&8));
        assert_eq!(l.remove(3), Some(8));
        assert_eq!(l.get(3), Some(&9));
        l.insert(2, 66).unwrap();
        assert_eq!(contents(&l), vec![5, 6, 66, 7, 9]);
        check_chain(&l);

        assert!(!l.is_empty());
        assert_eq!(l.remove(4), Some(9));
        assert_eq!(l.get(3), Some(&7));
        assert_eq!(l.back(), Some(&7));
        assert_eq!(l.remove(0), Some(5));
        assert_eq!(contents(&l), vec![6, 66, 7]);
        check_chain(&l);

        l.clear();
        assert_eq!(l.len(), 0);
        l.insert(0, 123).unwrap();
        assert!(l.insert(1, 124).is_ok());
        assert!(l.insert(2, 125).is_ok());
        let err = l.insert(4, 126).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::OutOfBounds { index: 4, len: 3 });
        assert_eq!(l.remove(3), None);
        check_chain(&l);

        for _ in 0..3 {
            l.remove(0);
        }
        assert!(l.is_empty());
        assert_eq!(l.front(), None);
        assert_eq!(l.back(), None);

        for i in 0..100 {
            l.insert(0, i).unwrap();
        }
        assert_eq!(l.len(), 100);
        assert_eq!(l.get(99), Some(&0));
        assert_eq!(l.get(0), Some(&99));
        assert_eq!(l.get(100), None);
        check_chain(&l);
    }

    #[test]
    fn tail_tracks_removals() {
        let mut l = five();
        assert_eq!(l.remove(4), Some(9));
        assert_eq!(l.back(), Some(&8));
        l.add(10).unwrap();
        assert_eq!(contents(&l), vec![5, 6, 7, 8, 10]);
        while l.len() > 1 {
            l.remove(l.len() - 1);
            check_chain(&l);
        }
        assert_eq!(l.front(), l.back());
        l.remove(0);
        assert_eq!(l.tail, None);
        l.add(1).unwrap();
        assert_eq!(l.front(), Some(&1));
        assert_eq!(l.back(), Some(&1));
        check_chain(&l);
    }

    #[test]
    fn drains_from_front_in_exactly_len_removals() {
        let mut l: LinkedList<u32> = (0..50).collect();
        let mut n = 0;
        while l.remove(0).is_some() {
            n += 1;
        }
        assert_eq!(n, 50);
        assert!(l.is_empty());
        check_chain(&l);
    }

    #[test]
    fn slots_are_recycled() {
        let mut l = five();
        l.remove(1);
        l.remove(1);
        assert_eq!(l.free.len(), 2);
        l.add(1).unwrap();
        l.push_front(0);
        assert!(l.free.is_empty());
        assert_eq!(l.slots.len(), 5);
        assert_eq!(contents(&l), vec![0, 5, 8, 9, 1]);
        check_chain(&l);
        l.clear();
        assert_eq!(l.slots.capacity(), 0);
    }

    #[test]
    fn walk_cache_resumes_and_resets() {
        let mut l: LinkedList<i32> = (0..10).collect();
        assert_eq!(l.get(3), Some(&3));
        assert_eq!(l.walk.get(), Some((3, 3)));
        assert_eq!(l.get(5), Some(&5));
        assert_eq!(l.walk.get(), Some((5, 5)));
        assert_eq!(l.get(2), Some(&2));
        // the last element comes from the tail, not from a walk
        assert_eq!(l.get(9), Some(&9));
        assert_eq!(l.walk.get(), Some((2, 2)));
        l.insert(1, 100).unwrap();
        assert_eq!(l.walk.get(), None);
        assert_eq!(l.get(3), Some(&2));
    }

    #[test]
    fn replace_and_update() {
        let mut l = five();
        assert_eq!(l.replace(4, 90), Ok(9));
        assert!(l.replace(5, 0).is_err());
        assert!(l.update(0, |x| x + 100));
        assert!(!l.update(5, |x| x + 100));
        *l.back_mut().unwrap() += 1;
        assert_eq!(contents(&l), vec![105, 6, 7, 8, 91]);
    }

    #[test]
    fn element_find() {
        let l = five();
        assert_eq!(l.find(&0, 0), None);
        assert_eq!(l.find(&9, 0), Some(4));
        assert_eq!(l.find(&9, 4), Some(4));
        assert_eq!(l.find(&5, 1), None);
        assert_eq!(l.find(&7, 10), None);
        assert!(l.contains(&8));
        assert!(!l.contains(&4));
    }

    #[test]
    fn copies_are_independent() {
        let l = five();
        let mut c = l.clone();
        assert_eq!(c, l);
        c.replace(0, 0).unwrap();
        c.add(10).unwrap();
        assert_eq!(contents(&l), vec![5, 6, 7, 8, 9]);
        assert_eq!(contents(&c), vec![0, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn clone_from_reuses_nodes() {
        let src = five();

        // longer destination: nodes are overwritten, surplus dropped and the arena trimmed
        let mut dst: LinkedList<i32> = (0..8).collect();
        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.slots.len(), 5);
        assert_eq!(dst.slots.capacity(), 5);
        assert!(dst.free.is_empty());
        assert_eq!(dst.back(), Some(&9));
        check_chain(&dst);

        // shorter destination: nodes are overwritten, then grown
        let mut dst: LinkedList<i32> = (0..2).collect();
        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.slots.len(), 5);
        check_chain(&dst);

        // empty source
        dst.clone_from(&LinkedList::new());
        assert!(dst.is_empty());
        assert_eq!(dst.front(), None);
        assert_eq!(dst.slots.capacity(), 0);
        check_chain(&dst);

        // empty destination
        let mut dst = LinkedList::new();
        dst.clone_from(&src);
        assert_eq!(dst, src);
        check_chain(&dst);
    }

    #[test]
    fn positions() {
        let mut l = five();
        let mut before = l.before_head();
        let third = l.position(2).unwrap();
        assert_eq!(l.get_at(before), None);
        assert_eq!(l.get_at(third), Some(&7));
        let fourth = l.next_position(third).unwrap();
        assert_eq!(l.get_at(fourth), Some(&8));
        assert_eq!(l.next_position(l.position(4).unwrap()), None);

        assert_eq!(l.remove_after(&mut before), Some(5));
        // `before` was refreshed, every other position is stale
        assert_eq!(l.get_at(third), None);
        let mut stale = fourth;
        assert_eq!(l.remove_after(&mut stale), None);
        let first = l.next_position(before).unwrap();
        assert_eq!(l.get_at(first), Some(&6));

        let mut last = l.position(3).unwrap();
        assert_eq!(l.remove_after(&mut last), None);
        let mut third = l.position(2).unwrap();
        assert_eq!(l.remove_after(&mut third), Some(9));
        assert_eq!(l.back(), Some(&8));
        *l.get_at_mut(third).unwrap() = 80;
        assert_eq!(contents(&l), vec![6, 7, 80]);
        check_chain(&l);
    }

    #[test]
    fn shrinking_gives_memory_back() {
        let mut l: LinkedList<[u8; 64]> = (0..1000).map(|i| [i as u8; 64]).collect();
        while l.len() > 1 {
            l.remove(1);
            assert!(l.free.len() <= l.len());
            assert!(l.slots.len() <= 2 * l.len());
        }
        assert_eq!(l.front(), Some(&[0; 64]));
        assert!(l.slots.capacity() <= 2);
        check_chain(&l);
    }

    #[test]
    fn positions_survive_compaction() {
        let mut l: LinkedList<i32> = (0..6).collect();
        let mut first = l.position(0).unwrap();
        for x in 1..5 {
            assert_eq!(l.remove_after(&mut first), Some(x));
            check_chain(&l);
        }
        // the fourth removal left more empty slots than nodes
        assert_eq!(l.slots.len(), 2);
        assert_eq!(l.get_at(first), Some(&0));
        assert_eq!(l.next_position(first).and_then(|p| l.get_at(p)), Some(&5));
        assert_eq!(l.remove_after(&mut first), Some(5));
        assert_eq!(l.back(), Some(&0));
        check_chain(&l);
    }

    #[test]
    fn foreign_positions_are_rejected() {
        let a: LinkedList<i32> = (0..5).collect();
        let mut b: LinkedList<i32> = (10..15).collect();
        let mut foreign = a.position(1).unwrap();
        assert_eq!(b.remove_after(&mut foreign), None);
        assert_eq!(b.get_at(foreign), None);
        assert_eq!(b.get_at_mut(foreign), None);
        assert_eq!(b.next_position(a.before_head()), None);
        assert_eq!(contents(&b), vec![10, 11, 12, 13, 14]);

        // a clone is a different list
        let c = b.clone();
        let own = b.position(0).unwrap();
        assert_eq!(c.get_at(own), None);
        assert_eq!(b.get_at(own), Some(&10));
    }

    #[test]
    fn print_it() {
        assert_eq!(format!("{:?}", five()), "[5, 6, 7, 8, 9]");
        assert_eq!(five().into_iter().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
        assert_eq!(format!("{:?}", LinkedList::<u8>::new()), "[]");
    }
}
