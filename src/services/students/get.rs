use super::StudentService;
use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::utils::SimulatedLatency;

/// 未知 ID 返回 `Ok(None)`，不视为错误
pub async fn get_student(service: &StudentService, student_id: &str) -> Result<Option<Student>> {
    SimulatedLatency::wait(service.latency.get).await;
    service.storage.get_student_by_id(student_id).await
}
