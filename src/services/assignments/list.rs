use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::utils::SimulatedLatency;

pub async fn list_assignments(service: &AssignmentService) -> Result<Vec<Assignment>> {
    SimulatedLatency::wait(service.latency.list).await;
    service.storage.list_assignments().await
}
