use super::MemoryStorage;
use crate::errors::{LmsError, Result};
use crate::models::assignments::{
    entities::Assignment,
    requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
};

pub(crate) const ASSIGNMENT_NOT_FOUND: &str = "Задание не найдено";

impl MemoryStorage {
    /// 列出全部作业
    pub async fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        Ok(self.collections.read().await.assignments.clone())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: &str) -> Result<Option<Assignment>> {
        let guard = self.collections.read().await;
        Ok(guard.assignments.iter().find(|a| a.id == id).cloned())
    }

    /// 创建作业，提交计数固定为 0
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let mut guard = self.collections.write().await;
        let id = self.fresh_id(guard.assignments.iter().map(|a| a.id.as_str()));
        let assignment = req.into_assignment(id);
        guard.assignments.push(assignment.clone());

        tracing::debug!("Assignment {} created", assignment.id);
        Ok(assignment)
    }

    /// 浅合并更新作业
    pub async fn update_assignment_impl(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        let mut guard = self.collections.write().await;
        let Some(existing) = guard.assignments.iter_mut().find(|a| a.id == id) else {
            return Err(LmsError::not_found(ASSIGNMENT_NOT_FOUND));
        };

        update.apply_to(existing);
        let assignment = existing.clone();

        tracing::debug!("Assignment {} updated", id);
        Ok(assignment)
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: &str) -> Result<()> {
        let mut guard = self.collections.write().await;
        let index = guard
            .assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| LmsError::not_found(ASSIGNMENT_NOT_FOUND))?;
        guard.assignments.remove(index);

        tracing::debug!("Assignment {} deleted", id);
        Ok(())
    }
}
