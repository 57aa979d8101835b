use serde::{Deserialize, Serialize};

use super::entities::{Assignment, AssignmentStatus};

// 作业创建请求；提交计数由存储层固定为 0，载荷中的同名字段会被忽略
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub due_date: chrono::NaiveDate,
    pub status: AssignmentStatus,
    pub max_score: f64,
}

impl CreateAssignmentRequest {
    pub fn into_assignment(self, id: String) -> Assignment {
        Assignment {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
            max_score: self.max_score,
            total_submissions: 0,
        }
    }
}

// 作业更新请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAssignmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_submissions: Option<i64>,
}

impl UpdateAssignmentRequest {
    /// 浅合并到已有记录
    pub fn apply_to(self, assignment: &mut Assignment) {
        if let Some(title) = self.title {
            assignment.title = title;
        }
        if let Some(description) = self.description {
            assignment.description = description;
        }
        if let Some(due_date) = self.due_date {
            assignment.due_date = due_date;
        }
        if let Some(status) = self.status {
            assignment.status = status;
        }
        if let Some(max_score) = self.max_score {
            assignment.max_score = max_score;
        }
        if let Some(total_submissions) = self.total_submissions {
            assignment.total_submissions = total_submissions;
        }
    }
}
