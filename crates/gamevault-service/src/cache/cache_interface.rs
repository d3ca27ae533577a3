//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use gamevault_core::VaultResult;
use shaku::Interface;

/// Cache interface for storing and retrieving cached data.
///
/// Entries have no expiry; they live until explicitly removed or the
/// process restarts. Uses JSON strings for type-erased storage to keep
/// the trait dyn-compatible, which also makes the in-memory backend
/// substitutable by a networked one without touching call sites.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Gets a raw JSON value from the cache.
    ///
    /// Returns `None` on a miss. Never touches the backing store.
    async fn get_raw(&self, key: &str) -> VaultResult<Option<String>>;

    /// Sets a raw JSON value, unconditionally overwriting. Last writer
    /// wins.
    async fn set_raw(&self, key: &str, value: &str) -> VaultResult<()>;

    /// Removes a value from the cache. Idempotent; removing an absent
    /// key is a no-op returning `false`.
    async fn remove(&self, key: &str) -> VaultResult<bool>;

    /// Checks if caching is enabled. A disabled cache always misses and
    /// turns set/remove into no-ops.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Gets a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> VaultResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Sets a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> VaultResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
