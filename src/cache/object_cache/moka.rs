use async_trait::async_trait;
use moka::future::Cache;
use tracing::{debug, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::CacheConfig;

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new(config: &CacheConfig) -> Self {
        // 按前缀失效依赖 invalidation closures，容量或 TTL 淘汰由 moka 自行处理
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.default_ttl))
            .support_invalidation_closures()
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, ttl: {}s",
            config.max_capacity, config.default_ttl
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String) {
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_prefix(&self, prefix: &str) {
        let owned = prefix.to_string();
        match self
            .inner
            .invalidate_entries_if(move |key, _| key.starts_with(&owned))
        {
            Ok(_) => debug!("Invalidated keys with prefix '{}'", prefix),
            Err(e) => {
                warn!(
                    "Prefix invalidation for '{}' unavailable ({}), clearing whole cache",
                    prefix, e
                );
                self.inner.invalidate_all();
            }
        }
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
