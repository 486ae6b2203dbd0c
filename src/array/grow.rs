use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::{array::Array, error::Error, list::List};

/// An array without a fixed size: the buffer is reallocated whenever an element does not fit.
///
/// Growth is _exact_: the buffer grows to precisely the size needed (by one element per
/// [`List::add`]), never doubling, so that no memory is reserved that was not asked for.
/// Call [`Self::ensure_capacity`] up front to make a known number of later additions O(1).
///
/// Removing elements never shrinks the buffer; only [`List::clear`] releases it.
///
/// ## Summary of supported operations
///
/// - Append, insert at index, remove at index (see [`List`]).
/// - Get, replace, and in-place update at index.
/// - Linear [`List::find`] / [`List::contains`].
///
/// ## Copy and move
///
/// - [`Clone`] produces an independent array whose buffer holds exactly the source's elements,
///   regardless of how much the source had reserved.
/// - Moving is a plain Rust move. [`core::mem::take`] leaves an empty, unallocated array behind.
///
/// Example:
/// ```
/// use nanocoll::{Array, GrowArray, List};
/// let mut a = GrowArray::new();
/// for x in [5, 6, 7, 8, 9] {
///     a.add(x).unwrap();
/// }
/// assert_eq!(a.capacity(), 5);
/// assert_eq!(a.remove(3), Some(8));
/// assert_eq!(a.capacity(), 5);
/// assert!(a.insert(2, 66).is_ok());
/// assert_eq!(a.as_slice(), &[5, 6, 66, 7, 9]);
/// a.clear();
/// assert_eq!(a.capacity(), 0);
/// ```
///
pub struct GrowArray<T> {
    buf: Vec<T>,
}

impl<T>
GrowArray<T> {
    /// Creates an empty array. Nothing is allocated.
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut a = Self::new();
        a.ensure_capacity(capacity);
        a
    }

    /// Grows the buffer, if needed, so that it can hold at least `min_capacity` elements.
    /// Elements are kept. Never shrinks the buffer.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.buf.capacity() {
            return;
        }
        trace!("growing array buffer from {} to {} elements", self.buf.capacity(), min_capacity);
        self.buf.reserve_exact(min_capacity - self.buf.len());
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.buf.iter() }

    /// Returns an iterator over the elements, allowing modification.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.buf.iter_mut() }

    /// Converts the array into a [`Vec`] without copying.
    pub fn into_vec(self) -> Vec<T> { self.buf }
}

impl<T>
List<T> for GrowArray<T> {
    fn add(&mut self, item: T) -> Result<(), Error<T>> {
        self.ensure_capacity(self.buf.len() + 1);
        self.buf.push(item);
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), Error<T>> {
        // no gaps
        if index > self.buf.len() {
            return Err(Error::out_of_bounds(item, index, self.buf.len()));
        }
        self.ensure_capacity(self.buf.len() + 1);
        self.buf.insert(index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.buf.len()).then(|| self.buf.remove(index))
    }

    fn get(&self, index: usize) -> Option<&T> { self.buf.get(index) }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.buf.get_mut(index) }

    fn len(&self) -> usize { self.buf.len() }

    /// Removes all elements and releases the buffer.
    fn clear(&mut self) {
        self.buf = Vec::new();
    }

    fn find(&self, item: &T, start: usize) -> Option<usize>
        where
            T: PartialEq,
    {
        let tail = self.buf.get(start..)?;
        tail.iter().position(|x| x == item).map(|i| start + i)
    }
}

impl<T>
Array<T> for GrowArray<T> {
    fn as_slice(&self) -> &[T] { &self.buf }

    fn as_mut_slice(&mut self) -> &mut [T] { &mut self.buf }

    fn capacity(&self) -> usize { self.buf.capacity() }
}

impl<T: Clone>
Clone for GrowArray<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.buf.len());
        buf.extend_from_slice(&self.buf);
        Self { buf }
    }
}

impl<T>
Default for GrowArray<T> {
    fn default() -> Self { Self::new() }
}

impl<T>
From<Vec<T>> for GrowArray<T> {
    fn from(buf: Vec<T>) -> Self { Self { buf } }
}

impl<T>
FromIterator<T> for GrowArray<T> {
    fn from_iter<It: IntoIterator<Item=T>>(iter: It) -> Self {
        let mut a = Self::new();
        a.extend(iter);
        a
    }
}

impl<T>
Extend<T> for GrowArray<T> {
    /// Reserves once for the lower size hint, then adds one by one.
    fn extend<It: IntoIterator<Item=T>>(&mut self, iter: It) {
        let iter = iter.into_iter();
        self.ensure_capacity(self.buf.len() + iter.size_hint().0);
        for elem in iter {
            self.ensure_capacity(self.buf.len() + 1);
            self.buf.push(elem);
        }
    }
}

impl<T>
IntoIterator for GrowArray<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.buf.into_iter() }
}

impl<'a, T>
IntoIterator for &'a GrowArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.buf.iter() }
}

// Spare capacity never takes part in the comparison.
impl<T: PartialEq>
PartialEq for GrowArray<T> {
    fn eq(&self, other: &Self) -> bool { self.buf == other.buf }
}

impl<T: Eq>
Eq for GrowArray<T> {}

impl<T: Debug>
Debug for GrowArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}
