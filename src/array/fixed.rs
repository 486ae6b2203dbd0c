use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::{array::Array, error::Error, list::List};

/// An array with a capacity fixed at construction.
/// The buffer is allocated once and never reallocated; writes beyond the capacity are rejected.
///
/// [`List::clear`] only forgets the elements: the buffer is kept for reuse.
///
/// Example:
/// ```
/// use nanocoll::{Array, ErrorKind, FixedArray, List};
/// let mut a = FixedArray::new(3);
/// assert!(a.add(1).is_ok());
/// assert!(a.add(3).is_ok());
/// assert!(a.insert(1, 2).is_ok());
/// assert!(a.is_full());
/// assert_eq!(a.add(4).unwrap_err().kind(), ErrorKind::Full { capacity: 3 });
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
/// ```
///
pub struct FixedArray<T> {
    buf: Vec<T>,
    cap: usize,
}

impl<T>
FixedArray<T> {
    /// Creates an empty array that can hold up to `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            cap: capacity,
        }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.buf.iter() }

    /// Returns an iterator over the elements, allowing modification.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.buf.iter_mut() }
}

impl<T>
List<T> for FixedArray<T> {
    fn add(&mut self, item: T) -> Result<(), Error<T>> {
        if self.is_full() {
            return Err(Error::full(item, self.cap));
        }
        self.buf.push(item);
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), Error<T>> {
        if index > self.buf.len() {
            return Err(Error::out_of_bounds(item, index, self.buf.len()));
        }
        if self.is_full() {
            return Err(Error::full(item, self.cap));
        }
        self.buf.insert(index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.buf.len()).then(|| self.buf.remove(index))
    }

    fn get(&self, index: usize) -> Option<&T> { self.buf.get(index) }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.buf.get_mut(index) }

    fn len(&self) -> usize { self.buf.len() }

    fn clear(&mut self) { self.buf.clear(); }
}

impl<T>
Array<T> for FixedArray<T> {
    fn as_slice(&self) -> &[T] { &self.buf }

    fn as_mut_slice(&mut self) -> &mut [T] { &mut self.buf }

    fn capacity(&self) -> usize { self.cap }

    fn is_full(&self) -> bool { self.buf.len() >= self.cap }
}

/// The copy has the same capacity as the source.
impl<T: Clone>
Clone for FixedArray<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend_from_slice(&self.buf);
        Self { buf, cap: self.cap }
    }
}

/// Collects into an array that is exactly full.
impl<T>
FromIterator<T> for FixedArray<T> {
    fn from_iter<It: IntoIterator<Item=T>>(iter: It) -> Self {
        let buf = iter.into_iter().collect::<Vec<_>>();
        let cap = buf.len();
        Self { buf, cap }
    }
}

impl<'a, T>
IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.buf.iter() }
}

// Capacity is not part of the comparison.
impl<T: PartialEq>
PartialEq for FixedArray<T> {
    fn eq(&self, other: &Self) -> bool { self.buf == other.buf }
}

impl<T: Eq>
Eq for FixedArray<T> {}

impl<T: Debug>
Debug for FixedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::ErrorKind;
    use super::*;

    #[test]
    fn rejects_when_full() {
        let mut a = FixedArray::new(2);
        assert!(a.is_empty());
        assert!(!a.is_full());
        a.add('a').unwrap();
        a.add('b').unwrap();
        assert!(a.is_full());
        let err = a.add('c').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Full { capacity: 2 });
        assert_eq!(err.into_inner(), 'c');
        let err = a.insert(0, 'c').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Full { capacity: 2 });
        let err = a.insert(3, 'c').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds { index: 3, len: 2 });
        assert_eq!(a.as_slice(), &['a', 'b']);
    }

    #[test]
    fn remove_shifts_left() {
        let mut a = FixedArray::new(4);
        for x in [1, 2, 3, 4] {
            a.add(x).unwrap();
        }
        assert_eq!(a.remove(1), Some(2));
        assert_eq!(a.remove(3), None);
        assert_eq!(a.as_slice(), &[1, 3, 4]);
        assert!(!a.is_full());
        a.insert(0, 0).unwrap();
        assert_eq!(a.as_slice(), &[0, 1, 3, 4]);
    }

    #[test]
    fn zero_capacity() {
        let mut a = FixedArray::<u8>::new(0);
        assert!(a.is_empty());
        assert!(a.is_full());
        assert!(a.add(1).is_err());
        assert!(a.insert(0, 1).is_err());
        assert_eq!(a.get(0), None);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut a: FixedArray<u16> = [1, 2, 3].into_iter().collect();
        assert_eq!(a.capacity(), 3);
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 3);
        a.add(7).unwrap();
        assert_eq!(a.as_slice(), &[7]);
    }

    #[test]
    fn copy_keeps_capacity() {
        let mut a = FixedArray::new(8);
        a.add(5).unwrap();
        let mut b = a.clone();
        assert_eq!(b.capacity(), 8);
        assert_eq!(a, b);
        b.add(6).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 1);
        assert_eq!(b.find(&6, 0), Some(1));
    }
}
