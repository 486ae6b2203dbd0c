use core::marker::PhantomData as P;

use crate::{
    cursor::{Cursor, RemovingCursor},
    list::List,
};

/// A removing cursor for any [`List`], built only from [`List::get`], [`List::len`] and
/// [`List::remove`].
///
/// Each step is one indexed lookup, so the cost per element is whatever `get` costs on the
/// underlying list: O(1) for arrays. Linked lists have their own cheaper cursor
/// ([`crate::LinkedCursor`]).
///
/// Example:
/// ```
/// use nanocoll::{Cursor, GrowArray, List, ListCursor, RemovingCursor};
/// let mut a = [5, 6, 7, 8, 9].into_iter().collect::<GrowArray<_>>();
/// let mut it = ListCursor::new(&mut a);
/// while let Some(&x) = it.next() {
///     if x == 6 {
///         assert_eq!(it.remove(), Some(6));
///         assert_eq!(it.remove(), None);
///     }
/// }
/// assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![5, 7, 8, 9]);
/// ```
pub struct ListCursor<'a, T, L: ?Sized> {
    list: Option<&'a mut L>,
    next_index: usize,
    removable: bool,
    _elem: P<fn() -> T>,
}

impl<'a, T, L>
ListCursor<'a, T, L>
    where
        L: List<T> + ?Sized,
{
    /// Creates a cursor at the first element of `list`.
    pub fn new(list: &'a mut L) -> Self {
        Self {
            list: Some(list),
            next_index: 0,
            removable: false,
            _elem: P,
        }
    }

    /// Detaches the cursor from its list: [`Cursor::has_next`] is `false` from now on.
    pub fn reset(&mut self) {
        self.list = None;
        self.next_index = 0;
        self.removable = false;
    }

    /// Moves the cursor to the first element of `list`.
    pub fn reset_to(&mut self, list: &'a mut L) {
        self.list = Some(list);
        self.next_index = 0;
        self.removable = false;
    }
}

impl<'a, T, L>
Cursor for ListCursor<'a, T, L>
    where
        L: List<T> + ?Sized,
{
    type Item = T;

    fn has_next(&self) -> bool {
        self.list.as_deref().map_or(false, |list| self.next_index < list.len())
    }

    fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            self.removable = false;
            return None;
        }
        self.next_index += 1;
        self.removable = true;
        self.list.as_deref()?.get(self.next_index - 1)
    }
}

impl<'a, T, L>
RemovingCursor for ListCursor<'a, T, L>
    where
        L: List<T> + ?Sized,
{
    fn remove(&mut self) -> Option<T> {
        if !self.removable {
            return None;
        }
        let list = self.list.as_deref_mut()?;
        self.removable = false;
        self.next_index -= 1;
        list.remove(self.next_index)
    }
}
