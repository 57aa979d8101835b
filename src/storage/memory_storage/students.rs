use super::MemoryStorage;
use crate::errors::{LmsError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};

pub(crate) const STUDENT_NOT_FOUND: &str = "Студент не найден";

impl MemoryStorage {
    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        Ok(self.collections.read().await.students.clone())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: &str) -> Result<Option<Student>> {
        let guard = self.collections.read().await;
        Ok(guard.students.iter().find(|s| s.id == id).cloned())
    }

    /// 创建学生并追加到集合末尾
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let mut guard = self.collections.write().await;
        let id = self.fresh_id(guard.students.iter().map(|s| s.id.as_str()));
        let student = req.into_student(id);
        guard.students.push(student.clone());

        tracing::debug!("Student {} created", student.id);
        Ok(student)
    }

    /// 浅合并更新学生
    pub async fn update_student_impl(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Student> {
        let mut guard = self.collections.write().await;
        let index = guard
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| LmsError::not_found(STUDENT_NOT_FOUND))?;

        let mut student = guard.students[index].clone();
        update.apply_to(&mut student);
        guard.students[index] = student.clone();

        tracing::debug!("Student {} updated", id);
        Ok(student)
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: &str) -> Result<()> {
        let mut guard = self.collections.write().await;
        let index = guard
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| LmsError::not_found(STUDENT_NOT_FOUND))?;
        guard.students.remove(index);

        tracing::debug!("Student {} deleted", id);
        Ok(())
    }
}
