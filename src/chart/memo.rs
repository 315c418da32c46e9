//! Bounded memoization for chart computations.

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

/// Maximum number of memoized results per cache.
pub const MEMO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// A size-capped memo table with first-in, first-out eviction.
///
/// Lookups use `peek`, which never refreshes an entry's position, so the
/// underlying LRU order is insertion order and the oldest entry is evicted
/// once the cap is reached.
pub struct MemoCache<K, V> {
    entries: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq, V: Clone> MemoCache<K, V> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return the memoized value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.lock().peek(&key) {
            return value.clone();
        }

        // Computed outside the lock; a racing caller may compute the same value.
        let value = compute();
        let mut entries = self.lock();
        if !entries.contains(&key) {
            entries.put(key, value.clone());
        }
        value
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<K, V>> {
        // Entries are immutable once stored, so a poisoned table is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> std::fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache").finish_non_exhaustive()
    }
}
