use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::{MokaCacheWrapper, ObjectCache};
use crate::config::AppConfig;
use crate::services::{LmsApi, QueryClient};
use crate::storage::{Storage, create_storage};
use crate::utils::SimulatedLatency;

/// 演示账号
pub const DEMO_EMAIL: &str = "admin@lms.com";
pub const DEMO_PASSWORD: &str = "admin";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub client: QueryClient,
}

/// 准备启动上下文
/// 包括存储、缓存和查询客户端
pub fn prepare_startup(config: &AppConfig) -> StartupContext {
    let storage = create_storage(config.seed.enabled);
    if config.seed.enabled {
        info!("Storage initialized with demo data");
    } else {
        warn!("Storage initialized empty (seed disabled)");
    }

    let latency = SimulatedLatency::from(&config.latency);
    if config.is_production() && latency != SimulatedLatency::none() {
        warn!("Simulated latency is enabled in production: {:?}", latency);
    }

    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new(&config.cache));
    info!("Cache backend initialized");

    let api = LmsApi::new(storage.clone(), latency);
    let client = QueryClient::new(api, cache.clone());

    StartupContext {
        storage,
        cache,
        client,
    }
}
