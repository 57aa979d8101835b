use serde::{Deserialize, Serialize};

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,  // 待批改
    Graded,   // 已评分
    Returned, // 已退回
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "pending";
    pub const GRADED: &'static str = "graded";
    pub const RETURNED: &'static str = "returned";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", SubmissionStatus::PENDING),
            SubmissionStatus::Graded => write!(f, "{}", SubmissionStatus::GRADED),
            SubmissionStatus::Returned => write!(f, "{}", SubmissionStatus::RETURNED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SubmissionStatus::PENDING => Ok(SubmissionStatus::Pending),
            SubmissionStatus::GRADED => Ok(SubmissionStatus::Graded),
            SubmissionStatus::RETURNED => Ok(SubmissionStatus::Returned),
            _ => Err(format!(
                "Invalid submission status: '{s}'. Supported: pending, graded, returned"
            )),
        }
    }
}

// 提交实体（只读的种子数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    // 关联的学生 ID（不做外键约束）
    pub student_id: String,
    // 关联的作业 ID（不做外键约束）
    pub assignment_id: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 仅在已评分时有意义
    pub score: Option<f64>,
    pub status: SubmissionStatus,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.status == SubmissionStatus::Graded
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }
}
