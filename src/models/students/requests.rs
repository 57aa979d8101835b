use serde::{Deserialize, Serialize};

use super::entities::{Student, StudentStatus};

// 学生创建请求（不含 ID，由存储层生成）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub group: String,
    pub enrolled_at: chrono::NaiveDate,
    pub status: StudentStatus,
}

impl CreateStudentRequest {
    pub fn into_student(self, id: String) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            group: self.group,
            enrolled_at: self.enrolled_at,
            status: self.status,
        }
    }
}

// 学生更新请求，未提供的字段保持原值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateStudentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled_at: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
}

impl UpdateStudentRequest {
    /// 浅合并到已有记录
    pub fn apply_to(self, student: &mut Student) {
        if let Some(first_name) = self.first_name {
            student.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            student.last_name = last_name;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
        if let Some(group) = self.group {
            student.group = group;
        }
        if let Some(enrolled_at) = self.enrolled_at {
            student.enrolled_at = enrolled_at;
        }
        if let Some(status) = self.status {
            student.status = status;
        }
    }
}
