use super::AssignmentService;
use crate::errors::Result;
use crate::utils::SimulatedLatency;

pub async fn delete_assignment(service: &AssignmentService, assignment_id: &str) -> Result<()> {
    SimulatedLatency::wait(service.latency.mutation).await;

    service.storage.delete_assignment(assignment_id).await?;
    tracing::info!("Assignment {} deleted", assignment_id);
    Ok(())
}
