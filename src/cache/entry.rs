//! Cache Entry Module
//!
//! Defines the arena slot that backs each LRU entry.

/// Null link in the recency list.
pub(crate) const NIL: usize = usize::MAX;

// == Cache Entry ==
/// A key/value pair plus its neighbours in the recency list.
///
/// `prev` points toward the most recently used end, `next` toward the least
/// recently used end. A vacant slot keeps its key but holds no value and
/// reuses `next` as the free-list link.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<K, V> {
    pub key: K,
    pub value: Option<V>,
    pub prev: usize,
    pub next: usize,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value: Some(value),
            prev: NIL,
            next: NIL,
        }
    }
}
