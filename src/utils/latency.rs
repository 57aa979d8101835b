use std::time::Duration;

use crate::config::LatencyConfig;

/// 模拟网络延迟
///
/// 每个外观操作在访问存储之前先等待对应的时长。测试中使用 [`SimulatedLatency::none`]。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub login: Duration,
    pub list: Duration,
    pub get: Duration,
    pub mutation: Duration,
    pub submissions: Duration,
    pub stats: Duration,
}

impl SimulatedLatency {
    /// 不等待
    pub fn none() -> Self {
        Self::default()
    }

    /// 默认延迟
    pub fn standard() -> Self {
        Self {
            login: Duration::from_millis(500),
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            mutation: Duration::from_millis(300),
            submissions: Duration::from_millis(400),
            stats: Duration::from_millis(600),
        }
    }

    pub async fn wait(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl From<&LatencyConfig> for SimulatedLatency {
    fn from(config: &LatencyConfig) -> Self {
        Self {
            login: Duration::from_millis(config.login_ms),
            list: Duration::from_millis(config.list_ms),
            get: Duration::from_millis(config.get_ms),
            mutation: Duration::from_millis(config.mutation_ms),
            submissions: Duration::from_millis(config.submissions_ms),
            stats: Duration::from_millis(config.stats_ms),
        }
    }
}
