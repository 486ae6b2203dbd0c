//! Defines the capability shared by every index-addressable container.

use crate::error::Error;

/// An ordered sequence of elements addressed by index `0..self.len()`.
///
/// Reads outside the sequence yield `None`; writes outside it are rejected with an [`Error`]
/// that hands the element back. Nothing panics on a bad index.
///
/// **The following operations are required to be implemented**:
///
/// - append / insert / remove --- [`Self::add`], [`Self::insert`], [`Self::remove`]
/// - element access --- [`Self::get`], [`Self::get_mut`]
/// - bookkeeping --- [`Self::len`], [`Self::clear`]
///
/// Everything else has a default implementation in terms of the above, which implementers may
/// override when they can do better (e.g. a linked list walking its chain once for [`Self::find`]).
///
/// Example:
/// ```
/// use nanocoll::{GrowArray, LinkedList, List};
/// fn fill<L: List<u32>>(mut list: L) -> L {
///     for x in [5, 6, 7, 8, 9] {
///         list.add(x).unwrap();
///     }
///     list
/// }
/// let a = fill(GrowArray::new());
/// let b = fill(LinkedList::new());
/// assert_eq!(a.find(&9, 0), Some(4));
/// assert_eq!(b.find(&5, 1), None);
/// ```
pub trait List<T> {
    /// Appends an element after the last one.
    /// Returns the element back if the list cannot grow.
    fn add(&mut self, item: T) -> Result<(), Error<T>>;

    /// Inserts an element at `index`, moving `index..len` one position towards the back.
    /// `index == len` is equivalent to [`Self::add`].
    /// Rejected (list unchanged) if `index > len` or the list cannot grow.
    fn insert(&mut self, index: usize, item: T) -> Result<(), Error<T>>;

    /// Removes and returns the element at `index`; `None` if the index is out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Returns the element at `index`; `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the element at `index` mutably; `None` if the index is out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns whether the list holds no element.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Replaces the element at `index` with `item` and returns the old element.
    /// Rejected (list unchanged) if the index is out of bounds.
    fn replace(&mut self, index: usize, item: T) -> Result<T, Error<T>> {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, item)),
            None => Err(Error::out_of_bounds(item, index, len)),
        }
    }

    /// Transforms the element at `index` by value (a.k.a. mutable map at index).
    /// Returns `false` (and does not call `f`) if the index is out of bounds.
    ///
    /// If `f` panics, the slot is left holding `T::default()`.
    fn update<F: FnOnce(T) -> T>(&mut self, index: usize, f: F) -> bool
        where
            T: Default,
            Self: Sized,
    {
        match self.get_mut(index) {
            Some(slot) => {
                replace_with::replace_with(slot, T::default, f);
                true
            }
            None => false,
        }
    }

    /// Returns the index of the first element equal to `item` at or after `start`;
    /// `None` if there is no such element (including when `start >= len`).
    fn find(&self, item: &T, start: usize) -> Option<usize>
        where
            T: PartialEq,
    {
        (start..self.len()).find(|&i| self.get(i) == Some(item))
    }

    /// Returns whether at least one element equals `item`.
    fn contains(&self, item: &T) -> bool
        where
            T: PartialEq,
    {
        self.find(item, 0).is_some()
    }
}
