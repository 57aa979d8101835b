use super::StudentService;
use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::utils::SimulatedLatency;

pub async fn list_students(service: &StudentService) -> Result<Vec<Student>> {
    SimulatedLatency::wait(service.latency.list).await;
    service.storage.list_students().await
}
