use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::UpdateAssignmentRequest};
use crate::utils::SimulatedLatency;

// total_submissions 可以被显式更新，与其它字段一样浅合并
pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: &str,
    update_data: UpdateAssignmentRequest,
) -> Result<Assignment> {
    SimulatedLatency::wait(service.latency.mutation).await;

    let assignment = service
        .storage
        .update_assignment(assignment_id, update_data)
        .await?;
    tracing::debug!("Assignment {} now {}", assignment.id, assignment.status);
    Ok(assignment)
}
