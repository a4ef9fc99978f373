// ABOUTME: Bounded LRU cache over parsed meal documents keyed by document path
// ABOUTME: Wraps any MealParser; document content is static for the process lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Annapurna

use annapurna_core::extraction::MealParser;
use annapurna_core::models::MealsBySlot;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Default cache capacity when configuration specifies zero entries.
const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(n) => n,
    None => unreachable!(),
};

/// Caching decorator over a [`MealParser`].
///
/// Plan documents never change while the process runs, so entries carry no
/// TTL; the LRU bound alone keeps memory flat when a large corpus is walked.
/// `Mutex` over `RwLock` because every hit mutates the recency order anyway.
pub struct CachingMealParser {
    inner: Arc<dyn MealParser>,
    store: Mutex<LruCache<PathBuf, Arc<MealsBySlot>>>,
}

impl CachingMealParser {
    /// Wrap `inner` with an LRU of `max_entries` (zero falls back to the
    /// default capacity).
    #[must_use]
    pub fn new(inner: Arc<dyn MealParser>, max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(DEFAULT_CAPACITY);
        Self {
            inner,
            store: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of cached documents.
    ///
    /// # Panics
    ///
    /// Propagates a poisoned cache lock; parsing never panics while holding it.
    #[must_use]
    #[allow(clippy::unwrap_used)] // Safe: lock is never poisoned, see above
    pub fn len(&self) -> usize {
        self.store.lock().unwrap().len()
    }

    /// Whether the cache holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MealParser for CachingMealParser {
    #[allow(clippy::unwrap_used)] // Safe: lock is never poisoned, parse runs outside it
    fn parse_meals(&self, locator: &Path) -> MealsBySlot {
        if let Some(cached) = self.store.lock().unwrap().get(locator) {
            debug!(document = %locator.display(), "meal cache hit");
            return MealsBySlot::clone(cached);
        }

        // Parse outside the lock; a racing miss on the same document costs one
        // redundant parse, not a deadlock.
        let parsed = self.inner.parse_meals(locator);
        self.store
            .lock()
            .unwrap()
            .put(locator.to_path_buf(), Arc::new(parsed.clone()));
        parsed
    }
}
