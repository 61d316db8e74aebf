//! Error types for hotcache

use std::fmt;

/// Result type alias for hotcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
///
/// A `get` on an absent key is a miss, not an error: it is reported as
/// `None` through the return channel. `put` has no error path at all.
#[derive(Debug)]
pub enum Error {
    /// Requested capacity is zero; the cache needs room for at least one entry
    InvalidCapacity(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(n) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", n)
            }
        }
    }
}

impl std::error::Error for Error {}
