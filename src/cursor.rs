//! Defines the cursor protocol shared by all containers, and the generic cursors.
//!
//! A cursor is a _lending_ iterator: [`Cursor::next`] hands out a reference that lives only
//! until the cursor is used again. This is what allows [`RemovingCursor::remove`] to delete the
//! element just returned without restarting the traversal.
//!
//! Every cursor borrows its container for as long as it lives. Mutating the container directly
//! while a cursor is outstanding is therefore rejected at compile time, and a cursor can never
//! observe storage that was reallocated or freed under it.
//!
//! For plain read-only traversal, prefer the containers' `iter()`, which are ordinary
//! [`Iterator`]s.

mod array;
mod list;

pub use self::{
    array::ArrayCursor,
    list::ListCursor,
};

/// The minimal cursor: check for more data, then take it.
pub trait Cursor {
    /// The element type of the underlying container.
    type Item;

    /// Returns whether [`Self::next`] will return an element.
    fn has_next(&self) -> bool;

    /// Advances the cursor and returns the element it moved past;
    /// `None` once the end is reached (calling it again stays harmless).
    fn next(&mut self) -> Option<&Self::Item>;
}

/// A cursor that can also remove the element most recently returned by [`Cursor::next`].
pub trait RemovingCursor: Cursor {
    /// Removes and returns the element last returned by [`Cursor::next`].
    ///
    /// Returns `None` without touching the container if [`Cursor::next`] has not returned an
    /// element yet, or if that element was already removed.
    fn remove(&mut self) -> Option<Self::Item>;
}
