#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod array;
pub mod cursor;
mod error;
pub mod linked;
pub mod list;
pub mod queue;

pub use self::{
    array::{Array, FixedArray, GrowArray},
    cursor::{ArrayCursor, Cursor, ListCursor, RemovingCursor},
    error::{Error, ErrorKind},
    linked::{LinkedCursor, LinkedList, Position},
    list::List,
    queue::{BoundedQueue, Overflow, Queue, QueueIndex, Reject, RingQueue, Sink, SinkingQueue},
};
