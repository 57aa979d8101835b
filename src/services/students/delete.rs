use super::StudentService;
use crate::errors::Result;
use crate::utils::SimulatedLatency;

pub async fn delete_student(service: &StudentService, student_id: &str) -> Result<()> {
    SimulatedLatency::wait(service.latency.mutation).await;

    service.storage.delete_student(student_id).await?;
    tracing::info!("Student {} deleted", student_id);
    Ok(())
}
