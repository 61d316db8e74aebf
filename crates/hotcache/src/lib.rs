//! # hotcache
//!
//! Fixed-capacity, thread-safe LRU cache with O(1) get/put.
//!
//! ## Architecture
//! - **Index**: AHash-backed map from key to node handle (O(1) lookup)
//! - **Recency list**: arena-backed doubly linked list with two fixed
//!   sentinel slots (O(1) insert, unlink, and tail eviction)
//! - **Lock**: one `parking_lot::Mutex` serializing every operation, so
//!   each call is atomic to all other callers
//!
//! ## Example
//! ```
//! use hotcache::HotCache;
//!
//! let cache = HotCache::new(2).unwrap();
//! cache.put(1, "a");
//! cache.put(2, "b");
//! cache.put(3, "c"); // Evicts key 1
//!
//! assert_eq!(cache.get(&1), None);
//! assert_eq!(cache.get(&3), Some("c"));
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod list;
mod lru;
mod stats;

pub use cache::HotCache;
pub use error::{Error, Result};
pub use lru::LruCache;
pub use stats::CacheStats;
