use super::StudentService;
use crate::errors::Result;
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use crate::utils::SimulatedLatency;

pub async fn update_student(
    service: &StudentService,
    student_id: &str,
    update_data: UpdateStudentRequest,
) -> Result<Student> {
    SimulatedLatency::wait(service.latency.mutation).await;
    service.storage.update_student(student_id, update_data).await
}
