use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::utils::SimulatedLatency;

pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: &str,
) -> Result<Option<Assignment>> {
    SimulatedLatency::wait(service.latency.get).await;

    let assignment = service.storage.get_assignment_by_id(assignment_id).await?;
    if assignment.is_none() {
        tracing::debug!("Assignment {} not found", assignment_id);
    }
    Ok(assignment)
}
