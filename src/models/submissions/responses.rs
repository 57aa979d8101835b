use serde::{Deserialize, Serialize};

use super::entities::Submission;
use crate::models::{assignments::entities::Assignment, students::entities::Student};

/// 附带关联学生与作业快照的提交
///
/// 关联记录在读取时按 ID 查找，找不到时为 `None`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSubmission {
    #[serde(flatten)]
    pub submission: Submission,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Assignment>,
}
