//! Error types shared by every collection in this crate.

use thiserror::Error;

/// All errors that can occur when operating on a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation needed an element but the collection had none.
    #[error("cannot {operation} from an empty {container}")]
    Empty {
        /// The kind of collection, e.g. `"stack"`.
        container: &'static str,
        /// The operation that was attempted, e.g. `"pop"`.
        operation: &'static str,
    },

    /// A bounded collection is already holding as many elements as it may.
    #[error("collection is full (capacity {capacity})")]
    Full {
        /// The configured maximum number of elements.
        capacity: usize,
    },

    /// A key cannot be ordered against the keys already stored.
    #[error("cannot order a {inserted} key against a stored {stored} key")]
    TypeMismatch {
        /// The kind of the key already in the collection.
        stored: &'static str,
        /// The kind of the key being inserted or searched for.
        inserted: &'static str,
    },

    /// Two keys of the same kind have no ordering (e.g. NaN).
    #[error("{0} has no ordering")]
    Incomparable(String),
}

/// Convenience result type for collection operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn empty(container: &'static str, operation: &'static str) -> Self {
        Self::Empty {
            container,
            operation,
        }
    }
}
