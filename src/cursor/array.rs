use crate::cursor::Cursor;

/// A reusable cursor over a contiguous run of elements, e.g. an [`crate::Array`].
///
/// Unlike [`core::slice::Iter`], it can be parked ([`Self::reset`]) and re-aimed
/// ([`Self::reset_to`]) without being rebuilt, which suits a cursor kept in a long-lived struct.
///
/// Example:
/// ```
/// use nanocoll::{ArrayCursor, Cursor};
/// let data = [1, 2, 3];
/// let mut it = ArrayCursor::new(&data);
/// assert_eq!(it.next(), Some(&1));
/// it.reset();
/// assert!(!it.has_next());
/// it.reset_to(&data[1..]);
/// assert_eq!(it.next(), Some(&2));
/// ```
#[derive(Clone, Debug)]
pub struct ArrayCursor<'a, T> {
    rest: &'a [T],
}

impl<'a, T>
ArrayCursor<'a, T> {
    /// Creates a cursor at the first element of `elements`.
    pub fn new(elements: &'a [T]) -> Self {
        Self { rest: elements }
    }

    /// Returns how many elements are left.
    pub fn remaining(&self) -> usize { self.rest.len() }

    /// Empties the cursor: [`Cursor::has_next`] is `false` from now on.
    pub fn reset(&mut self) {
        self.rest = &[];
    }

    /// Moves the cursor to the first element of `elements`.
    pub fn reset_to(&mut self, elements: &'a [T]) {
        self.rest = elements;
    }
}

impl<'a, T>
Default for ArrayCursor<'a, T> {
    fn default() -> Self { Self { rest: &[] } }
}

impl<'a, T>
Cursor for ArrayCursor<'a, T> {
    type Item = T;

    fn has_next(&self) -> bool { !self.rest.is_empty() }

    fn next(&mut self) -> Option<&T> {
        let (first, rest) = self.rest.split_first()?;
        self.rest = rest;
        Some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_then_stays_empty() {
        let data = [10, 20, 30];
        let mut it = ArrayCursor::new(&data);
        assert_eq!(it.remaining(), 3);
        assert_eq!(it.next(), Some(&10));
        assert_eq!(it.next(), Some(&20));
        assert!(it.has_next());
        assert_eq!(it.next(), Some(&30));
        assert!(!it.has_next());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn reset() {
        let data = [1u8, 2, 3, 4];
        let mut it = ArrayCursor::default();
        assert!(!it.has_next());
        it.reset_to(&data);
        assert_eq!(it.remaining(), 4);
        it.reset();
        assert_eq!(it.next(), None);
        it.reset_to(&data[2..]);
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.next(), None);
    }
}
