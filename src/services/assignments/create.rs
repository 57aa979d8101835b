use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::utils::SimulatedLatency;

/// 创建作业
///
/// `total_submissions` 始终从 0 开始，之后不会随提交数据更新。
pub async fn create_assignment(
    service: &AssignmentService,
    assignment_data: CreateAssignmentRequest,
) -> Result<Assignment> {
    SimulatedLatency::wait(service.latency.mutation).await;

    let assignment = service.storage.create_assignment(assignment_data).await?;
    tracing::info!("Assignment {} \"{}\" created", assignment.id, assignment.title);
    Ok(assignment)
}
