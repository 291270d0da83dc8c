// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-document memoization of typed lookups.

use std::collections::HashMap;
use std::sync::RwLock;

/// A thread-safe map from dot-path strings to previously resolved values.
///
/// Entries are only ever inserted, never invalidated. Concurrent misses for the
/// same key may both resolve and insert; the values are identical so the last
/// write winning is harmless. A poisoned lock makes lookups miss and inserts no-op,
/// which only costs a fresh resolution.
#[derive(Debug)]
pub struct TypedCache<T> {
    entries: RwLock<HashMap<String, T>>,
}

impl<T: Clone> TypedCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a copy of the cached value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<T> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Stores `value` under `key`.
    pub fn insert(&self, key: &str, value: T) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
    }

    /// Returns `true` if `key` has a cached value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for TypedCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
