pub mod stats;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::dashboard::responses::DashboardStats;
use crate::storage::Storage;
use crate::utils::SimulatedLatency;

#[derive(Clone)]
pub struct DashboardService {
    storage: Arc<dyn Storage>,
    latency: SimulatedLatency,
}

impl DashboardService {
    pub fn new(storage: Arc<dyn Storage>, latency: SimulatedLatency) -> Self {
        Self { storage, latency }
    }

    // 获取仪表盘统计（每次重新计算）
    pub async fn stats(&self) -> Result<DashboardStats> {
        stats::get_dashboard_stats(self).await
    }
}
