use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_bounds(operation: &'static str, index: usize, len: usize) -> Error {
        Error(
            ErrorKind::IndexOutOfBounds {
                operation,
                index,
                len,
            }
            .into(),
        )
    }

    pub fn empty_sequence(operation: &'static str) -> Error {
        Error(ErrorKind::EmptySequence { operation }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{operation}: index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{operation}: sequence is empty")]
    EmptySequence { operation: &'static str },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

/// Error returned by [`try_pop`](crate::ops::try_pop) when the index is out of range.
///
/// The rejected sequence is handed back untouched, so the caller does not lose it.
#[derive(Error)]
#[error("pop: index {index} out of bounds for sequence of length {}", .items.len())]
pub struct PopError<T> {
    index: usize,
    items: Vec<T>,
}

impl<T> PopError<T> {
    pub(crate) fn new(index: usize, items: Vec<T>) -> Self {
        PopError { index, items }
    }

    /// The index that was requested.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Recovers the sequence that was passed in.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Shows the length only, so `T` needs no `Debug` bound.
impl<T> std::fmt::Debug for PopError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopError")
            .field("index", &self.index)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> From<PopError<T>> for Error {
    fn from(e: PopError<T>) -> Self {
        Error::index_out_of_bounds("pop", e.index, e.items.len())
    }
}
