use crate::{
    cursor::{Cursor, RemovingCursor},
    linked::{LinkedList, Position},
};

/// A removing cursor over a [`LinkedList`].
///
/// It remembers the node before the element it last returned, so both stepping and removing
/// are O(1), unlike [`crate::ListCursor`] which pays an indexed lookup per step.
///
/// Example:
/// ```
/// use nanocoll::{Cursor, LinkedList, RemovingCursor};
/// let mut l: LinkedList<i32> = [5, 6, 7, 8, 9].into_iter().collect();
/// let mut it = l.cursor();
/// while let Some(&x) = it.next() {
///     if x % 2 == 1 {
///         it.remove();
///     }
/// }
/// assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![6, 8]);
/// ```
pub struct LinkedCursor<'a, T> {
    list: &'a mut LinkedList<T>,
    /// Node before `current` (or before where it was, once removed).
    before: Position,
    /// Node last returned by `next`; `None` before the first step and after a removal.
    current: Option<Position>,
    removable: bool,
}

impl<'a, T>
LinkedCursor<'a, T> {
    /// Creates a cursor at the first element of `list`.
    pub fn new(list: &'a mut LinkedList<T>) -> Self {
        let before = list.before_head();
        Self {
            list,
            before,
            current: None,
            removable: false,
        }
    }

    /// Moves the cursor back to the first element.
    pub fn reset(&mut self) {
        self.before = self.list.before_head();
        self.current = None;
        self.removable = false;
    }

    fn upcoming(&self) -> Option<Position> {
        self.list.next_position(self.current.unwrap_or(self.before))
    }
}

impl<'a, T>
Cursor for LinkedCursor<'a, T> {
    type Item = T;

    fn has_next(&self) -> bool { self.upcoming().is_some() }

    fn next(&mut self) -> Option<&T> {
        let Some(upcoming) = self.upcoming() else {
            self.removable = false;
            return None;
        };
        if let Some(current) = self.current {
            self.before = current;
        }
        self.current = Some(upcoming);
        self.removable = true;
        self.list.get_at(upcoming)
    }
}

impl<'a, T>
RemovingCursor for LinkedCursor<'a, T> {
    fn remove(&mut self) -> Option<T> {
        if !self.removable {
            return None;
        }
        self.removable = false;
        let removed = self.list.remove_after(&mut self.before)?;
        self.current = None;
        Some(removed)
    }
}
