//! Defines a trait for contiguous lists, and the arrays implementing it.

mod fixed;
mod grow;

use crate::{cursor::ArrayCursor, list::List};

pub use self::{
    fixed::FixedArray,
    grow::GrowArray,
};

/// A [`List`] whose elements are stored contiguously, in order, in a single buffer.
///
/// On top of [`List`], the following operations are required to be implemented:
///
/// - raw view of the elements --- [`Self::as_slice`] and [`Self::as_mut_slice`]
/// - size of the allocated buffer --- [`Self::capacity`]
///
/// Example:
/// ```
/// use nanocoll::{Array, FixedArray, GrowArray, List};  // must also import the traits
/// fn first_two<A: Array<u8>>(a: &A) -> &[u8] {
///     &a.as_slice()[..2]
/// }
/// let g = [1, 2, 3].into_iter().collect::<GrowArray<u8>>();
/// let f = [4, 5, 6].into_iter().collect::<FixedArray<u8>>();
/// assert_eq!(first_two(&g), &[1, 2]);
/// assert_eq!(first_two(&f), &[4, 5]);
/// assert!(!g.is_full());
/// assert!(f.is_full());
/// ```
pub trait Array<T>: List<T> {
    /// Returns all elements as one contiguous slice (a.k.a. `toArray`).
    /// The slice is empty (never dangling) when the array is empty.
    fn as_slice(&self) -> &[T];

    /// Returns all elements as one contiguous mutable slice.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Returns how many elements fit without reallocating (or at all, for fixed arrays).
    /// Never less than [`List::len`].
    fn capacity(&self) -> usize;

    /// Returns whether the array cannot take another element.
    /// Arrays that grow on demand are never full.
    fn is_full(&self) -> bool { false }

    /// Returns a reusable cursor over the current elements.
    fn cursor(&self) -> ArrayCursor<'_, T> { ArrayCursor::new(self.as_slice()) }
}
