//! Cache provider abstraction
//!
//! The service layer memoizes expensive read projections (the fully linked
//! tree graph) through this port. Entries live until they are explicitly
//! evicted by the hosting application; this layer never invalidates them,
//! so writes from other requests can leave a cached projection stale until
//! the host decides to evict.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Type-erased cache port.
///
/// Values are stored as `Arc<dyn Any>` so one provider instance can serve
/// every projection type; `get_or_try_insert` on the trait object gives
/// typed access.
pub trait CacheProvider: Send + Sync {
    /// Returns the cached value for a key, if present
    fn get(&self, key: &str) -> Option<Arc<dyn Any + Send + Sync>>;

    /// Stores a value under a key, replacing any previous entry
    fn put(&self, key: &str, value: Arc<dyn Any + Send + Sync>);

    /// Removes an entry; returns true if one existed
    fn evict(&self, key: &str) -> bool;

    /// Removes every entry
    fn clear(&self);
}

impl dyn CacheProvider {
    /// Returns the cached value for a key, downcast to `T`.
    ///
    /// An entry of a different type is treated as a miss.
    pub fn get_typed<T: Send + Sync + 'static>(&self, key: &str) -> Option<Arc<T>> {
        self.get(key).and_then(|value| value.downcast::<T>().ok())
    }

    /// Returns the cached value for a key, computing and storing it on a miss.
    ///
    /// The factory may decline to produce a value (`Ok(None)`); absence is
    /// not cached, so a later call gets another chance to compute it.
    /// Factory errors propagate without touching the cache.
    pub fn get_or_try_insert<T, E>(
        &self,
        key: &str,
        factory: impl FnOnce() -> Result<Option<T>, E>,
    ) -> Result<Option<Arc<T>>, E>
    where
        T: Send + Sync + 'static,
    {
        if let Some(hit) = self.get_typed::<T>(key) {
            return Ok(Some(hit));
        }

        match factory()? {
            Some(value) => {
                let value = Arc::new(value);
                self.put(key, value.clone());
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

/// Unbounded in-memory cache.
///
/// Entries persist until [`CacheProvider::evict`] or
/// [`CacheProvider::clear`]; there is no size limit and no expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl MemoryCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    /// Returns true if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheProvider for MemoryCache {
    fn get(&self, key: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        self.entries
            .read()
            .expect("cache lock poisoned")
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, value: Arc<dyn Any + Send + Sync>) {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .insert(key.to_string(), value);
    }

    fn evict(&self, key: &str) -> bool {
        self.entries
            .write()
            .expect("cache lock poisoned")
            .remove(key)
            .is_some()
    }

    fn clear(&self) {
        self.entries.write().expect("cache lock poisoned").clear();
    }
}

/// Cache that never stores anything.
///
/// Used when projection caching is disabled in settings: every lookup is a
/// miss and every store is dropped.
#[derive(Debug, Default)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

impl CacheProvider for NullCache {
    fn get(&self, _key: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        None
    }

    fn put(&self, _key: &str, _value: Arc<dyn Any + Send + Sync>) {}

    fn evict(&self, _key: &str) -> bool {
        false
    }

    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(cache: &MemoryCache) -> &(dyn CacheProvider + 'static) {
        cache
    }

    #[test]
    fn test_memory_cache_roundtrip() {
        let cache = MemoryCache::new();
        let value = provider(&cache)
            .get_or_try_insert("answer", || Ok::<_, std::convert::Infallible>(Some(42u32)))
            .unwrap()
            .unwrap();
        assert_eq!(*value, 42);

        // Second lookup is served from the cache, not the factory
        let cached = provider(&cache)
            .get_or_try_insert("answer", || {
                Ok::<_, std::convert::Infallible>(Some(7u32))
            })
            .unwrap()
            .unwrap();
        assert_eq!(*cached, 42);
    }

    #[test]
    fn test_absent_values_are_not_cached() {
        let cache = MemoryCache::new();
        let miss = provider(&cache)
            .get_or_try_insert::<u32, std::convert::Infallible>("missing", || Ok(None))
            .unwrap();
        assert!(miss.is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_factory_errors_propagate() {
        let cache = MemoryCache::new();
        let result =
            provider(&cache).get_or_try_insert::<u32, &str>("broken", || Err("factory failed"));
        assert_eq!(result.unwrap_err(), "factory failed");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_evict() {
        let cache = MemoryCache::new();
        provider(&cache).put("k", Arc::new(1u8));
        assert!(provider(&cache).evict("k"));
        assert!(!provider(&cache).evict("k"));
        assert!(provider(&cache).get("k").is_none());
    }

    #[test]
    fn test_mismatched_type_is_a_miss() {
        let cache = MemoryCache::new();
        provider(&cache).put("k", Arc::new("text".to_string()));
        assert!(provider(&cache).get_typed::<u32>("k").is_none());
        assert!(provider(&cache).get_typed::<String>("k").is_some());
    }

    #[test]
    fn test_null_cache_never_stores() {
        let cache = NullCache::new();
        let p: &dyn CacheProvider = &cache;
        p.put("k", Arc::new(1u8));
        assert!(p.get("k").is_none());
        assert!(!p.evict("k"));
    }
}
