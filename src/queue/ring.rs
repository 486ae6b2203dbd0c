use alloc::boxed::Box;
use core::{
    fmt::{Debug, Formatter},
    iter::Chain,
    marker::PhantomData as P,
    slice,
};

use crate::{
    error::Error,
    queue::{Overflow, Queue, QueueIndex, Reject, Sink},
};

/// A first-in first-out queue over a circular buffer whose capacity is fixed at construction.
///
/// - `T`: element type.
/// - `B`: what happens on enqueue when full --- [`Reject`] or [`Sink`]
///   (see the aliases [`crate::BoundedQueue`] and [`crate::SinkingQueue`]).
/// - `I`: unsigned integer type storing the front index and the length
///   (see [`crate::QueueIndex`]).
///
/// The buffer is allocated once and never resized. Occupancy is tracked as `(front, len)`:
/// the element at the front lives at physical slot `front`, the `i`-th one at
/// `(front + i) % capacity`. Slots outside that window are always empty, so the queue never
/// keeps an element alive after it was dequeued or cleared.
///
/// ## Summary of supported operations
///
/// - Enqueue at the back, dequeue at the front.
/// - Peek at the front, or at any index from the front.
///
/// ## Iterator support
///
/// - [`Self::iter`] walks the elements from front to back without removing them.
/// - By-value [`IntoIterator`] drains the queue from the front.
///
/// Example:
/// ```
/// use nanocoll::{Queue, SinkingQueue};
/// let mut q = SinkingQueue::<u32, u8>::new(3);
/// for x in 0..=3 {
///     q.enqueue(x).unwrap();
/// }
/// assert!(q.is_full());
/// assert_eq!(q.peek(), Some(&1));
/// assert_eq!(q.peek_at(2), Some(&3));
/// assert_eq!(q.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
///
pub struct RingQueue<T, B: Overflow = Reject, I: QueueIndex = usize> {
    buf: Box<[Option<T>]>,
    front: I,
    len: I,
    _overflow: P<B>,
}

impl<T, B: Overflow, I: QueueIndex>
RingQueue<T, B, I> {
    /// Creates an empty queue that can hold up to `capacity` elements.
    /// Panics if `capacity` does not fit the index type `I`.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty queue that can hold up to `capacity` elements.
    /// Fails if `capacity` does not fit the index type `I`.
    pub fn try_new(capacity: usize) -> Result<Self, Error> {
        if <I as num_traits::NumCast>::from(capacity).is_none() {
            return Err(Error::capacity_overflow(capacity));
        }
        Ok(Self {
            buf: (0..capacity).map(|_| None).collect(),
            front: I::zero(),
            len: I::zero(),
            _overflow: P,
        })
    }

    /// Returns the maximum number of elements this queue can hold.
    pub fn capacity(&self) -> usize { self.buf.len() }

    /// Returns how many elements are currently in the queue.
    pub fn len(&self) -> usize { self.len.as_() }

    /// Returns whether this queue is empty.
    pub fn is_empty(&self) -> bool { self.len == I::zero() }

    /// Returns whether this queue holds [`Self::capacity`] elements.
    /// A queue of capacity 0 is always full.
    pub fn is_full(&self) -> bool { self.len() == self.capacity() }

    /// Physical slot of the `offset`-th element from the front. Requires `offset <= capacity`.
    fn slot(&self, offset: usize) -> usize {
        let front = self.front.as_();
        let to_end = self.buf.len() - front;
        if offset < to_end { front + offset } else { offset - to_end }
    }

    /// Moves the front index one slot forward, wrapping around.
    fn advance_front(&mut self) {
        let next = self.front + I::one();
        self.front = if next.as_() == self.buf.len() { I::zero() } else { next };
    }

    /// The live window as (up to) two runs of slots, in order.
    fn runs(&self) -> (&[Option<T>], &[Option<T>]) {
        let front = self.front.as_();
        let len = self.len();
        if front + len <= self.buf.len() {
            (&self.buf[front..front + len], &self.buf[..0])
        } else {
            let (head, tail) = self.buf.split_at(front);
            (tail, &head[..len - tail.len()])
        }
    }

    ////////////////////////////////////////////////////////////////////
    // push

    /// Puts `item` behind the last element, evicting the front one if full and `B` allows.
    /// Returns the evicted element, if any.
    fn push(&mut self, item: T) -> Result<Option<T>, Error<T>> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Err(Error::full(item, capacity));
        }
        let back = self.slot(self.len());
        if !self.is_full() {
            self.buf[back] = Some(item);
            self.len = self.len + I::one();
            return Ok(None);
        }
        if !B::EVICTS {
            return Err(Error::full(item, capacity));
        }
        // full: the back slot is the front slot
        trace!("queue full, evicting oldest element at slot {}", back);
        let evicted = self.buf[back].replace(item);
        self.advance_front();
        Ok(evicted)
    }

    /// Adds an element to the back of this queue.
    ///
    /// When the queue is full, a [`crate::BoundedQueue`] returns the element back, while a
    /// [`crate::SinkingQueue`] silently drops its oldest element to make room.
    /// A queue of capacity 0 always returns the element back.
    pub fn enqueue(&mut self, item: T) -> Result<(), Error<T>> {
        self.push(item).map(|_| ())
    }

    ////////////////////////////////////////////////////////////////////
    // get

    /// Returns the element at the front of this queue, or `None` if the queue is empty.
    pub fn peek(&self) -> Option<&T> { self.peek_at(0) }

    /// Returns the `i`-th element from the front; `None` if the index is out of bounds.
    pub fn peek_at(&self, i: usize) -> Option<&T> {
        if i >= self.len() {
            return None;
        }
        self.buf[self.slot(i)].as_ref()
    }

    /// Returns the `i`-th element from the front mutably; `None` if the index is out of bounds.
    pub fn peek_at_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len() {
            return None;
        }
        let slot = self.slot(i);
        self.buf[slot].as_mut()
    }

    /// Returns an iterator over the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        let (a, b) = self.runs();
        Iter { inner: a.iter().chain(b.iter()) }
    }

    ////////////////////////////////////////////////////////////////////
    // pop

    /// Removes the front element from this queue and returns it;
    /// `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.front.as_();
        let item = self.buf[front].take();
        self.advance_front();
        self.len = self.len - I::one();
        item
    }

    /// Removes all elements. The buffer is kept.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.front = I::zero();
        self.len = I::zero();
    }
}

impl<T, I: QueueIndex>
RingQueue<T, Sink, I> {
    /// Adds an element to the back of this queue.
    /// If the queue is full, removes and returns the element at the front; otherwise `None`.
    /// A queue of capacity 0 returns the element back.
    pub fn enqueue_circular(&mut self, item: T) -> Result<Option<T>, Error<T>> {
        self.push(item)
    }
}

impl<T, B: Overflow, I: QueueIndex>
Queue<T> for RingQueue<T, B, I> {
    fn enqueue(&mut self, item: T) -> Result<(), Error<T>> { self.push(item).map(|_| ()) }

    fn dequeue(&mut self) -> Option<T> { RingQueue::dequeue(self) }

    fn peek_at(&self, index: usize) -> Option<&T> { RingQueue::peek_at(self, index) }

    fn len(&self) -> usize { RingQueue::len(self) }

    fn capacity(&self) -> usize { RingQueue::capacity(self) }

    fn clear(&mut self) { RingQueue::clear(self) }

    fn contains(&self, item: &T) -> bool
        where
            T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }
}

/// The copy holds only the live elements, re-laid out from physical slot 0.
impl<T: Clone, B: Overflow, I: QueueIndex>
Clone for RingQueue<T, B, I> {
    fn clone(&self) -> Self {
        let mut buf: Box<[Option<T>]> = (0..self.capacity()).map(|_| None).collect();
        for (slot, elem) in buf.iter_mut().zip(self.iter()) {
            *slot = Some(elem.clone());
        }
        Self {
            buf,
            front: I::zero(),
            len: self.len,
            _overflow: P,
        }
    }
}

/// Self-iterates by dequeuing from the front.
pub struct IntoIter<T, B: Overflow, I: QueueIndex>(RingQueue<T, B, I>);

impl<T, B: Overflow, I: QueueIndex>
Iterator for IntoIter<T, B, I> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.dequeue() }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T, B: Overflow, I: QueueIndex>
IntoIterator for RingQueue<T, B, I> {
    type Item = T;
    type IntoIter = IntoIter<T, B, I>;
    fn into_iter(self) -> Self::IntoIter { IntoIter(self) }
}

/// Iterator over the elements of a [`RingQueue`], from front to back.
pub struct Iter<'a, T> {
    inner: Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
}

impl<'a, T>
Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        // every slot of the live window is occupied
        self.inner.next()?.as_ref()
    }
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<'a, T, B: Overflow, I: QueueIndex>
IntoIterator for &'a RingQueue<T, B, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// Custom eq is needed --- slots outside the live window, and where the window starts, should
// not take part in the comparison.
impl<T: PartialEq, B: Overflow, I: QueueIndex>
PartialEq for RingQueue<T, B, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, B: Overflow, I: QueueIndex>
Eq for RingQueue<T, B, I> {}

impl<T: Debug, B: Overflow, I: QueueIndex>
Debug for RingQueue<T, B, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
