//! Defines the queue capability, and the fixed-capacity circular queues implementing it.
//!
//! Both queues share one ring-buffer engine ([`RingQueue`]) and differ only in what happens
//! when an element is enqueued while the queue is full, as chosen by a marker type:
//!
//! - [`Reject`] ([`BoundedQueue`]): the new element is handed back in an [`Error`], the queue
//!   is left unchanged.
//! - [`Sink`] ([`SinkingQueue`]): the oldest element is evicted to make room; the queue stays
//!   full.
//!
//! ```
//! use nanocoll::{BoundedQueue, Queue, SinkingQueue};
//!
//! let mut bounded = BoundedQueue::<u8>::new(2);
//! assert!(bounded.enqueue(1).is_ok());
//! assert!(bounded.enqueue(2).is_ok());
//! assert!(bounded.enqueue(3).is_err());
//!
//! let mut sinking = SinkingQueue::<u8>::new(2);
//! assert_eq!(sinking.enqueue_circular(1), Ok(None));
//! assert_eq!(sinking.enqueue_circular(2), Ok(None));
//! assert_eq!(sinking.enqueue_circular(3), Ok(Some(1)));
//! assert_eq!(sinking.dequeue(), Some(2));
//! ```

mod ring;

use num_traits::{AsPrimitive, PrimInt, Unsigned};

use crate::error::Error;

pub use self::ring::{IntoIter, Iter, RingQueue};

/// A queue that rejects new elements when full.
pub type BoundedQueue<T, I = usize> = RingQueue<T, Reject, I>;

/// A queue that evicts its oldest element to make room when full.
pub type SinkingQueue<T, I = usize> = RingQueue<T, Sink, I>;

/// Unsigned integer type used to store a queue's front index and length.
///
/// Picking `u8` or `u16` shrinks the bookkeeping of small queues on memory-starved targets;
/// the capacity must then fit the type (see [`RingQueue::try_new`]).
pub trait QueueIndex: PrimInt + Unsigned + AsPrimitive<usize> {}

impl<I> QueueIndex for I where I: PrimInt + Unsigned + AsPrimitive<usize> {}

mod sealed {
    pub trait Sealed {}
}

/// What a [`RingQueue`] does with a new element when it is full.
pub trait Overflow: sealed::Sealed {
    /// `true` if the oldest element makes room for the new one; `false` if the new one is
    /// rejected.
    const EVICTS: bool;
}

/// Full queues reject new elements.
#[derive(Copy, Clone, Debug, Default)]
pub struct Reject;

/// Full queues evict (sink) their oldest element.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sink;

impl sealed::Sealed for Reject {}
impl sealed::Sealed for Sink {}

impl Overflow for Reject {
    const EVICTS: bool = false;
}

impl Overflow for Sink {
    const EVICTS: bool = true;
}

/// A first-in first-out queue.
///
/// **The following operations are required to be implemented**:
///
/// - [`Self::enqueue`] and [`Self::dequeue`]
/// - random read access from the front --- [`Self::peek_at`]
/// - bookkeeping --- [`Self::len`], [`Self::capacity`], [`Self::clear`]
pub trait Queue<T> {
    /// Adds an element to the back of the queue.
    /// Returns the element back if the queue does not take it.
    fn enqueue(&mut self, item: T) -> Result<(), Error<T>>;

    /// Removes and returns the element at the front; `None` if the queue is empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the `i`-th element from the front without removing it;
    /// `None` if the index is out of bounds.
    fn peek_at(&self, index: usize) -> Option<&T>;

    /// Returns how many elements are currently in the queue (a.k.a. queue length).
    fn len(&self) -> usize;

    /// Returns the maximum number of elements the queue can hold.
    fn capacity(&self) -> usize;

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns the element at the front without removing it; `None` if the queue is empty.
    fn peek(&self) -> Option<&T> { self.peek_at(0) }

    /// Returns whether the queue holds no element.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns whether the queue holds [`Self::capacity`] elements.
    /// A queue of capacity 0 is always both empty and full.
    fn is_full(&self) -> bool { self.len() == self.capacity() }

    /// Returns whether at least one element in the queue equals `item`.
    fn contains(&self, item: &T) -> bool
        where
            T: PartialEq,
    {
        (0..self.len()).any(|i| self.peek_at(i) == Some(item))
    }
}
