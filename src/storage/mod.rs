use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    submissions::entities::Submission,
};

use crate::errors::Result;

pub mod memory_storage;

pub use memory_storage::MemoryStorage;

/// 三个集合在同一时刻的快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub students: Vec<Student>,
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<Submission>,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 列出学生（按插入顺序）
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    // 创建学生，ID 由存储生成
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 浅合并更新学生，ID 不存在时返回 NotFound
    async fn update_student(&self, id: &str, update: UpdateStudentRequest) -> Result<Student>;
    // 删除学生，ID 不存在时返回 NotFound
    async fn delete_student(&self, id: &str) -> Result<()>;

    /// 作业管理方法
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;
    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>>;
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    async fn update_assignment(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn delete_assignment(&self, id: &str) -> Result<()>;

    /// 提交（只读）
    async fn list_submissions(&self) -> Result<Vec<Submission>>;

    // 一次性读取全部集合，用于关联与统计
    async fn snapshot(&self) -> Result<Collections>;
}

pub fn create_storage(seed: bool) -> Arc<dyn Storage> {
    let storage = if seed {
        MemoryStorage::seeded()
    } else {
        MemoryStorage::new()
    };
    Arc::new(storage)
}
