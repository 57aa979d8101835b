pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::storage::Storage;
use crate::utils::SimulatedLatency;

#[derive(Clone)]
pub struct StudentService {
    storage: Arc<dyn Storage>,
    latency: SimulatedLatency,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>, latency: SimulatedLatency) -> Self {
        Self { storage, latency }
    }

    // 获取学生列表
    pub async fn list(&self) -> Result<Vec<Student>> {
        list::list_students(self).await
    }

    // 根据ID获取学生
    pub async fn get(&self, student_id: &str) -> Result<Option<Student>> {
        get::get_student(self, student_id).await
    }

    // 创建学生
    pub async fn create(&self, student_data: CreateStudentRequest) -> Result<Student> {
        create::create_student(self, student_data).await
    }

    // 更新学生信息
    pub async fn update(
        &self,
        student_id: &str,
        update_data: UpdateStudentRequest,
    ) -> Result<Student> {
        update::update_student(self, student_id, update_data).await
    }

    // 删除学生
    pub async fn delete(&self, student_id: &str) -> Result<()> {
        delete::delete_student(self, student_id).await
    }
}
