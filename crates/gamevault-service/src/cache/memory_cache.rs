//! In-memory cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use gamevault_core::VaultResult;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Process-local cache backed by a read-write locked map.
///
/// Individual get/set/remove calls are safe under concurrency; there is
/// no cross-key atomicity.
#[derive(Component, Clone)]
#[shaku(interface = CacheInterface)]
pub struct MemoryCacheService {
    entries: Arc<RwLock<HashMap<String, String>>>,
    #[shaku(default = true)]
    enabled: bool,
}

impl MemoryCacheService {
    /// Creates a new enabled cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            enabled: true,
        }
    }

    /// Creates a no-op cache. Every read misses, every write is dropped.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            enabled: false,
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Checks whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for MemoryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInterface for MemoryCacheService {
    async fn get_raw(&self, key: &str) -> VaultResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }

        let value = self.entries.read().get(key).cloned();
        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str) -> VaultResult<()> {
        if !self.enabled {
            return Ok(());
        }

        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        debug!("Cached key '{}'", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> VaultResult<bool> {
        if !self.enabled {
            return Ok(false);
        }

        let removed = self.entries.write().remove(key).is_some();
        debug!("Removed key '{}': {}", key, removed);
        Ok(removed)
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for MemoryCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheService")
            .field("enabled", &self.enabled)
            .field("entries", &self.len())
            .finish()
    }
}
