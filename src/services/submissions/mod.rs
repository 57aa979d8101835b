pub mod enrich;
pub mod list;
pub mod recent;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::responses::EnrichedSubmission;
use crate::storage::Storage;
use crate::utils::SimulatedLatency;

pub use enrich::DEFAULT_RECENT_LIMIT;

#[derive(Clone)]
pub struct SubmissionService {
    storage: Arc<dyn Storage>,
    latency: SimulatedLatency,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>, latency: SimulatedLatency) -> Self {
        Self { storage, latency }
    }

    // 获取全部提交（附带学生与作业）
    pub async fn list(&self) -> Result<Vec<EnrichedSubmission>> {
        list::list_submissions(self).await
    }

    // 获取最近的提交，`limit` 缺省为 5
    pub async fn recent(&self, limit: Option<usize>) -> Result<Vec<EnrichedSubmission>> {
        recent::recent_submissions(self, limit.unwrap_or(DEFAULT_RECENT_LIMIT)).await
    }
}
