use core::fmt::{Debug, Display, Formatter};

/// Why a write was rejected. See [`Error`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The container holds `capacity` elements and cannot take more.
    Full { capacity: usize },
    /// `index` is not a valid position for the operation on a container of length `len`.
    OutOfBounds { index: usize, len: usize },
    /// A capacity of `capacity` elements cannot be addressed by the chosen index type.
    CapacityOverflow { capacity: usize },
}

/// A rejected write: the reason, plus the element that could not be stored.
///
/// No container mutates its state when it returns this error; the element is handed back
/// untouched and can be recovered with [`Self::into_inner`].
///
/// Example:
/// ```
/// use nanocoll::{BoundedQueue, ErrorKind, Queue};
/// let mut q = BoundedQueue::<u8>::new(1);
/// assert!(q.enqueue(1).is_ok());
/// let err = q.enqueue(2).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Full { capacity: 1 });
/// assert_eq!(err.into_inner(), 2);
/// ```
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Error<T = ()> {
    kind: ErrorKind,
    element: T,
}

impl<T> Error<T> {
    pub(crate) fn full(element: T, capacity: usize) -> Self {
        debug!("rejected write: full at capacity {}", capacity);
        Self { kind: ErrorKind::Full { capacity }, element }
    }

    pub(crate) fn out_of_bounds(element: T, index: usize, len: usize) -> Self {
        debug!("rejected write: index {} out of bounds for length {}", index, len);
        Self { kind: ErrorKind::OutOfBounds { index, len }, element }
    }

    /// Returns the reason of the rejection.
    pub fn kind(&self) -> ErrorKind { self.kind }

    /// Returns a reference to the rejected element.
    pub fn element(&self) -> &T { &self.element }

    /// Returns the rejected element.
    pub fn into_inner(self) -> T { self.element }

    /// Drops the rejected element, keeping only the reason.
    pub fn discard(self) -> Error {
        Error { kind: self.kind, element: () }
    }
}

impl Error {
    pub(crate) fn capacity_overflow(capacity: usize) -> Self {
        Self { kind: ErrorKind::CapacityOverflow { capacity }, element: () }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            ErrorKind::Full { capacity } =>
                write!(f, "container is full (capacity {})", capacity),
            ErrorKind::OutOfBounds { index, len } =>
                write!(f, "index {} is out of bounds for length {}", index, len),
            ErrorKind::CapacityOverflow { capacity } =>
                write!(f, "capacity {} does not fit the index type", capacity),
        }
    }
}

// The element is not printed: it need not implement `Debug`.
impl<T> Debug for Error<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Error").field("kind", &self.kind).finish_non_exhaustive()
    }
}

impl<T> Display for Error<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for Error<T> {}
