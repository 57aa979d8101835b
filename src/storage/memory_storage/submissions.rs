use super::MemoryStorage;
use crate::errors::Result;
use crate::models::submissions::entities::Submission;

impl MemoryStorage {
    /// 列出全部提交（未关联）
    pub async fn list_submissions_impl(&self) -> Result<Vec<Submission>> {
        Ok(self.collections.read().await.submissions.clone())
    }
}
