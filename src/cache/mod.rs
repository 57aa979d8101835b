//! 查询缓存
//!
//! 以字符串键缓存 JSON 序列化后的读取结果，写操作成功后按前缀失效。

pub mod object_cache;

use async_trait::async_trait;

pub use object_cache::moka::MokaCacheWrapper;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
    /// 使所有以 `prefix` 开头的键失效
    async fn invalidate_prefix(&self, prefix: &str);
    async fn invalidate_all(&self);
}
