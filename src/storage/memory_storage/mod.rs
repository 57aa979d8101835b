//! 内存存储实现
//!
//! 三个有序集合放在同一把读写锁之后，每个操作只持锁一次。

mod assignments;
pub mod seed;
mod students;
mod submissions;

use tokio::sync::RwLock;
use tracing::info;

use super::{Collections, Storage};
use crate::errors::Result;
use crate::utils::IdGenerator;

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub(crate) collections: RwLock<Collections>,
    pub(crate) ids: IdGenerator,
}

impl MemoryStorage {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用给定集合创建存储
    pub fn with_collections(collections: Collections) -> Self {
        info!(
            "Memory storage initialized: {} students, {} assignments, {} submissions",
            collections.students.len(),
            collections.assignments.len(),
            collections.submissions.len()
        );
        Self {
            collections: RwLock::new(collections),
            ids: IdGenerator::new(),
        }
    }

    /// 使用演示数据创建存储
    pub fn seeded() -> Self {
        Self::with_collections(seed::seed_collections())
    }

    /// 生成在给定集合中尚未使用的 ID
    pub(crate) fn fresh_id<'a, I>(&self, existing: I) -> String
    where
        I: Iterator<Item = &'a str> + Clone,
    {
        loop {
            let id = self.ids.next_id();
            if !existing.clone().any(|taken| taken == id) {
                return id;
            }
        }
    }
}

// Storage trait 实现
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

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn update_student(&self, id: &str, update: UpdateStudentRequest) -> Result<Student> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: &str) -> Result<()> {
        self.delete_student_impl(id).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl().await
    }

    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn update_assignment(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: &str) -> Result<()> {
        self.delete_assignment_impl(id).await
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        self.list_submissions_impl().await
    }

    async fn snapshot(&self) -> Result<Collections> {
        Ok(self.collections.read().await.clone())
    }
}
