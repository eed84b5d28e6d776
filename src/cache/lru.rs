//! LRU Cache Module
//!
//! Fixed-capacity key/value store with least recently used eviction.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::cache::entry::{CacheEntry, NIL};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const MAX_PREALLOCATED: usize = 1024;

// == LRU Cache ==
/// Bounded map that evicts the least recently used entry on overflow.
///
/// Entries live in a `Vec` arena linked into a doubly-linked recency list:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// A `HashMap` from key to arena index keeps `get`, `put` and eviction O(1).
/// Both `get` and `put` refresh recency, so the list is a total order and the
/// tail is always the single eviction candidate.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Maximum number of live entries
    capacity: NonZeroUsize,
    /// Key to arena index
    index: HashMap<K, usize>,
    /// Entry storage, including vacant slots
    arena: Vec<CacheEntry<K, V>>,
    head: usize,
    tail: usize,
    /// First vacant slot, chained through `next`
    free: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        // One extra slot: put inserts before it evicts.
        let reserved = capacity.get().saturating_add(1).min(MAX_PREALLOCATED);
        Self {
            capacity,
            index: HashMap::with_capacity(reserved),
            arena: Vec::with_capacity(reserved),
            head: NIL,
            tail: NIL,
            free: NIL,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss has no side effect.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.move_to_head(idx);
        self.arena[idx].value.as_ref()
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.arena[idx].value.as_ref()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Put ==
    /// Inserts or overwrites `key`, marking it most recently used.
    ///
    /// Overwriting keeps the size unchanged. Inserting a new key into a full
    /// cache evicts exactly one entry, the least recently used, which is
    /// returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            self.arena[idx].value = Some(value);
            self.move_to_head(idx);
            return None;
        }

        let idx = self.alloc(key.clone(), value);
        self.push_head(idx);
        self.index.insert(key, idx);

        if self.index.len() > self.capacity.get() {
            self.evict_tail()
        } else {
            None
        }
    }

    // == Iteration ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
        }
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    // == Internal List Operations ==

    fn alloc(&mut self, key: K, value: V) -> usize {
        let entry = CacheEntry::new(key, value);
        if self.free == NIL {
            self.arena.push(entry);
            self.arena.len() - 1
        } else {
            let idx = self.free;
            self.free = self.arena[idx].next;
            self.arena[idx] = entry;
            idx
        }
    }

    fn unlink(&mut self, idx: usize) {
        let prev = self.arena[idx].prev;
        let next = self.arena[idx].next;

        if prev == NIL {
            self.head = next;
        } else {
            self.arena[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.arena[next].prev = prev;
        }

        self.arena[idx].prev = NIL;
        self.arena[idx].next = NIL;
    }

    fn push_head(&mut self, idx: usize) {
        self.arena[idx].prev = NIL;
        self.arena[idx].next = self.head;

        if self.head != NIL {
            self.arena[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn move_to_head(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.push_head(idx);
    }

    fn evict_tail(&mut self) -> Option<(K, V)> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        self.unlink(idx);

        let key = self.arena[idx].key.clone();
        self.index.remove(&key);
        let value = self.arena[idx].value.take();

        self.arena[idx].next = self.free;
        self.free = idx;

        value.map(|v| (key, v))
    }
}

// == Iterator ==
/// Most to least recently used iterator over an [`LruCache`].
pub struct Iter<'a, K, V> {
    arena: &'a [CacheEntry<K, V>],
    cursor: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor != NIL {
            let entry = &self.arena[self.cursor];
            self.cursor = entry.next;
            if let Some(value) = entry.value.as_ref() {
                return Some((&entry.key, value));
            }
        }
        None
    }
}
