use super::StudentService;
use crate::errors::Result;
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::SimulatedLatency;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
) -> Result<Student> {
    SimulatedLatency::wait(service.latency.mutation).await;

    let student = service.storage.create_student(student_data).await?;
    tracing::info!("Student {} ({}) created", student.id, student.full_name());
    Ok(student)
}
