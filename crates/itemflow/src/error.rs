//! Error types for the collection-view engine.

/// Result type alias for collection-view operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the collection view.
///
/// Pool misses and not-yet-ready scroll requests are *not* errors: the former
/// is an expected control-flow branch (a fresh item is materialized), the
/// latter is queued and replayed after layout initialization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An items layout must be attached before the operation.
    #[error("no items layout attached")]
    NoLayout,

    /// An items source must be attached before the operation.
    #[error("no items source attached")]
    NoSource,

    /// An item template must be installed before plain items can be realized.
    #[error("no item template installed")]
    NoItemTemplate,

    /// Index outside the valid range of the attached source.
    #[error("index {index} is out of bounds (source has {count} slots)")]
    IndexOutOfBounds { index: usize, count: usize },

    /// A template factory produced no usable item.
    #[error("realizing item at index {index} failed: template produced no item")]
    RealizeFailed { index: usize },
}

impl Error {
    /// Create an out-of-bounds error.
    pub fn out_of_bounds(index: usize, count: usize) -> Self {
        Self::IndexOutOfBounds { index, count }
    }

    /// Create a realize-failure error.
    pub fn realize_failed(index: usize) -> Self {
        Self::RealizeFailed { index }
    }
}
