use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub latency: LatencyConfig,
    pub cache: CacheConfig,
    pub seed: SeedConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 模拟网络延迟配置（毫秒）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub list_ms: u64,
    pub get_ms: u64,
    pub mutation_ms: u64,
    pub submissions_ms: u64,
    pub stats_ms: u64,
}

/// 查询缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub default_ttl: u64, // 秒
    pub max_capacity: u64,
}

/// 演示数据配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub enabled: bool,
}
