pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment,
    requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
};
use crate::storage::Storage;
use crate::utils::SimulatedLatency;

#[derive(Clone)]
pub struct AssignmentService {
    storage: Arc<dyn Storage>,
    latency: SimulatedLatency,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>, latency: SimulatedLatency) -> Self {
        Self { storage, latency }
    }

    // 获取作业列表
    pub async fn list(&self) -> Result<Vec<Assignment>> {
        list::list_assignments(self).await
    }

    // 根据ID获取作业
    pub async fn get(&self, assignment_id: &str) -> Result<Option<Assignment>> {
        get::get_assignment(self, assignment_id).await
    }

    // 创建作业
    pub async fn create(&self, assignment_data: CreateAssignmentRequest) -> Result<Assignment> {
        create::create_assignment(self, assignment_data).await
    }

    // 更新作业信息
    pub async fn update(
        &self,
        assignment_id: &str,
        update_data: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        update::update_assignment(self, assignment_id, update_data).await
    }

    // 删除作业
    pub async fn delete(&self, assignment_id: &str) -> Result<()> {
        delete::delete_assignment(self, assignment_id).await
    }
}
